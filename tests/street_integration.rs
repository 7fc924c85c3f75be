//! Street streaming integration tests: trigger distance, window bounds,
//! chain geometry, and turn policy injection.

use std::f32::consts::FRAC_PI_2;

use bevy_ecs::prelude::*;
use glam::Vec3;

use streetcat::components::playercat::PlayerCat;
use streetcat::components::worldposition::WorldPosition;
use streetcat::resources::gameconfig::SimConfig;
use streetcat::resources::street::{StraightAhead, StreetStream, TurnPolicy};
use streetcat::systems::street::stream_street;

const EPSILON: f32 = 1e-4;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

/// Turn policy that plays back a fixed list of yaw deltas, then goes
/// straight.
struct ScriptedTurns {
    deltas: Vec<f32>,
    next: usize,
}

impl ScriptedTurns {
    fn new(deltas: Vec<f32>) -> Self {
        Self { deltas, next: 0 }
    }
}

impl TurnPolicy for ScriptedTurns {
    fn decide(&mut self) -> f32 {
        let delta = self.deltas.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        delta
    }
}

fn make_world(policy: Box<dyn TurnPolicy>) -> World {
    let mut world = World::new();
    let config = SimConfig::new();
    world.insert_resource(StreetStream::seeded(config.segment_length, policy));
    world.insert_resource(config);
    world.spawn((PlayerCat, WorldPosition::new(0.0, 0.25, 0.0)));
    world
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(stream_street);
    schedule.run(world);
}

fn move_cat(world: &mut World, pos: Vec3) {
    let mut query = world.query_filtered::<&mut WorldPosition, With<PlayerCat>>();
    query.single_mut(world).unwrap().pos = pos;
}

#[test]
fn seeded_window_matches_spawn_street() {
    let world = make_world(Box::new(StraightAhead));
    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.window.len(), 3);
    let ids: Vec<u64> = stream.window.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert!(approx_vec(stream.last_origin, Vec3::new(0.0, 0.0, -80.0)));
    assert_eq!(stream.last_yaw, 0.0);
}

#[test]
fn straight_append_extends_along_heading() {
    // Tail at (0,0,-80) with yaw 0; the cat at the origin is 80 units away,
    // inside the 120-unit trigger.
    let mut world = make_world(Box::new(StraightAhead));
    tick(&mut world);

    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.last_id, 3);
    assert!(approx_vec(stream.last_origin, Vec3::new(0.0, 0.0, -120.0)));
    assert_eq!(stream.last_yaw, 0.0);
}

#[test]
fn quarter_turn_changes_heading_not_this_origin() {
    // The turn delta applies to the new segment's yaw; the forward offset
    // still uses the predecessor's yaw.
    let mut world = make_world(Box::new(ScriptedTurns::new(vec![FRAC_PI_2])));
    tick(&mut world);

    {
        let stream = world.resource::<StreetStream>();
        assert!(approx_vec(stream.last_origin, Vec3::new(0.0, 0.0, -120.0)));
        assert!((stream.last_yaw - FRAC_PI_2).abs() < EPSILON);
    }

    // The next straight append follows the rotated heading: -z rotated by
    // +PI/2 points toward -x.
    move_cat(&mut world, Vec3::new(0.0, 0.25, -120.0));
    tick(&mut world);

    let stream = world.resource::<StreetStream>();
    assert!(approx_vec(stream.last_origin, Vec3::new(-40.0, 0.0, -120.0)));
}

#[test]
fn no_append_outside_trigger_distance() {
    let mut world = make_world(Box::new(StraightAhead));
    move_cat(&mut world, Vec3::new(0.0, 0.25, 80.0));
    tick(&mut world);

    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.last_id, 2);
    assert_eq!(stream.window.len(), 3);
}

#[test]
fn one_segment_per_tick_even_when_far_behind() {
    // A teleporting cat cannot make the stream catch up in a single tick.
    let mut world = make_world(Box::new(StraightAhead));
    move_cat(&mut world, Vec3::new(0.0, 0.25, -80.0));
    tick(&mut world);

    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.last_id, 3);
}

#[test]
fn window_stays_bounded_with_ascending_ids() {
    let mut world = make_world(Box::new(StraightAhead));
    for _ in 0..100 {
        // Chase the tail so every tick triggers an append.
        let tail = world.resource::<StreetStream>().last_origin;
        move_cat(&mut world, tail + Vec3::new(0.0, 0.25, 0.0));
        tick(&mut world);

        let stream = world.resource::<StreetStream>();
        assert!(!stream.window.is_empty());
        assert!(stream.window.len() <= 10);
        let ids: Vec<u64> = stream.window.iter().map(|s| s.id).collect();
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.window.len(), 10);
    assert_eq!(stream.last_id, 102);
    assert_eq!(stream.window.back().unwrap().id, stream.last_id);
}

#[test]
fn eviction_drops_oldest_first() {
    let mut world = make_world(Box::new(StraightAhead));
    for _ in 0..8 {
        let tail = world.resource::<StreetStream>().last_origin;
        move_cat(&mut world, tail);
        tick(&mut world);
    }
    let stream = world.resource::<StreetStream>();
    assert_eq!(stream.window.len(), 10);
    assert_eq!(stream.window.front().unwrap().id, 1);
}
