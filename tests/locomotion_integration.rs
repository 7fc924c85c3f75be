//! Locomotion integration tests: movement, jumping, gait phase, and the
//! audio side effects of state edges.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use streetcat::components::heading::Heading;
use streetcat::components::locomotion::{CatAction, Locomotion};
use streetcat::components::playercat::PlayerCat;
use streetcat::components::worldposition::WorldPosition;
use streetcat::events::audio::AudioCmd;
use streetcat::events::locomotion::observe_cat_jumped;
use streetcat::resources::gameconfig::SimConfig;
use streetcat::resources::input::{IntentSnapshot, IntentState};
use streetcat::resources::worldtime::WorldTime;
use streetcat::systems::input::update_intent_state;
use streetcat::systems::locomotion::locomotion;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(SimConfig::new());
    world.insert_resource(IntentSnapshot::default());
    world.insert_resource(IntentState::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.spawn(Observer::new(observe_cat_jumped));
    world.flush();
    world.spawn((
        PlayerCat,
        WorldPosition::new(0.0, 0.25, 0.0),
        Heading::default(),
        Locomotion::default(),
    ));
    world
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_intent_state, locomotion).chain());
    schedule.run(world);
}

fn set_intents(world: &mut World, snapshot: IntentSnapshot) {
    *world.resource_mut::<IntentSnapshot>() = snapshot;
}

fn cat_state(world: &mut World) -> (WorldPosition, Heading, Locomotion) {
    let mut query =
        world.query_filtered::<(&WorldPosition, &Heading, &Locomotion), With<PlayerCat>>();
    let (p, h, l) = query.single(world).unwrap();
    (*p, *h, *l)
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .collect()
}

#[test]
fn jump_launches_in_one_tick() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            jump: true,
            ..Default::default()
        },
    );
    tick(&mut world);

    let (_, _, loco) = cat_state(&mut world);
    assert!(!loco.grounded);
    assert_eq!(loco.action, CatAction::Jumping);
    assert!(loco.vertical_velocity > 0.0);
}

#[test]
fn jump_edge_emits_one_audio_cmd_per_launch() {
    let mut world = make_world(1.0 / 60.0);
    // Hold jump well past landing; only the launch tick may play a sound.
    set_intents(
        &mut world,
        IntentSnapshot {
            jump: true,
            ..Default::default()
        },
    );
    let mut launches = 0;
    let mut prev = CatAction::Idle;
    for _ in 0..120 {
        tick(&mut world);
        let (_, _, loco) = cat_state(&mut world);
        if loco.action == CatAction::Jumping && prev != CatAction::Jumping {
            launches += 1;
        }
        prev = loco.action;
    }
    let jumps = drain_audio(&mut world)
        .iter()
        .filter(|c| matches!(c, AudioCmd::PlayJump))
        .count();
    // 5 up / 15 down is ~0.67 s airborne, so the held jump relaunches after
    // each landing; every launch plays exactly one sound.
    assert!(launches >= 2);
    assert_eq!(jumps, launches);
}

#[test]
fn grounded_height_is_exact_without_jump() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        tick(&mut world);
        let (pos, _, loco) = cat_state(&mut world);
        assert_eq!(pos.pos.y, 0.25);
        assert!(loco.grounded);
    }
}

#[test]
fn jump_lands_back_on_ground_plane() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            jump: true,
            ..Default::default()
        },
    );
    tick(&mut world);
    set_intents(&mut world, IntentSnapshot::default());
    // 5/15 launch/gravity puts the flight at about two thirds of a second.
    for _ in 0..60 {
        tick(&mut world);
    }
    let (pos, _, loco) = cat_state(&mut world);
    assert_eq!(pos.pos.y, 0.25);
    assert!(loco.grounded);
    assert_eq!(loco.vertical_velocity, 0.0);
    assert_eq!(loco.action, CatAction::Idle);
}

#[test]
fn forward_one_second_runs_four_units() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        tick(&mut world);
        let (_, _, loco) = cat_state(&mut world);
        assert_eq!(loco.action, CatAction::Running);
    }
    let (pos, _, _) = cat_state(&mut world);
    assert!(approx_eq(pos.pos.z, -4.0), "z = {}", pos.pos.z);
    assert!(approx_eq(pos.pos.x, 0.0));
}

#[test]
fn sneak_one_second_crawls_and_sneaks() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            sneak: true,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        tick(&mut world);
        let (_, _, loco) = cat_state(&mut world);
        assert_eq!(loco.action, CatAction::Sneaking);
    }
    let (pos, _, _) = cat_state(&mut world);
    assert!(approx_eq(pos.pos.z, -1.5), "z = {}", pos.pos.z);
}

#[test]
fn backward_moves_along_positive_z() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            backward: true,
            ..Default::default()
        },
    );
    for _ in 0..30 {
        tick(&mut world);
    }
    let (pos, _, _) = cat_state(&mut world);
    assert!(approx_eq(pos.pos.z, 2.0), "z = {}", pos.pos.z);
}

#[test]
fn turning_works_while_stationary() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            left: true,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        tick(&mut world);
    }
    let (pos, heading, loco) = cat_state(&mut world);
    assert!(approx_eq(heading.yaw, 3.0), "yaw = {}", heading.yaw);
    assert!(approx_eq(pos.pos.z, 0.0));
    assert_eq!(loco.action, CatAction::Idle);
}

#[test]
fn turn_then_move_composes_within_one_tick() {
    // A quarter turn accumulated first, then forward: motion follows the
    // new heading, not the spawn heading.
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            left: true,
            ..Default::default()
        },
    );
    // 3 rad/s for ~0.5236 s is a quarter turn.
    for _ in 0..(60.0 * std::f32::consts::FRAC_PI_2 / 3.0) as u32 + 1 {
        tick(&mut world);
    }
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    for _ in 0..60 {
        tick(&mut world);
    }
    let (pos, _, _) = cat_state(&mut world);
    // Yaw ~ +PI/2 turns local -z into world -x.
    assert!(pos.pos.x < -3.9, "x = {}", pos.pos.x);
    assert!(pos.pos.z.abs() < 0.2, "z = {}", pos.pos.z);
}

#[test]
fn gait_phase_stays_in_range_and_resets_on_idle() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    for _ in 0..200 {
        tick(&mut world);
        let (_, _, loco) = cat_state(&mut world);
        assert!(loco.gait_phase >= 0.0 && loco.gait_phase < std::f32::consts::TAU);
    }
    let (_, _, loco) = cat_state(&mut world);
    assert!(loco.gait_phase != 0.0);

    // Release everything: idle resets the phase on the same tick.
    set_intents(&mut world, IntentSnapshot::default());
    tick(&mut world);
    let (_, _, loco) = cat_state(&mut world);
    assert_eq!(loco.action, CatAction::Idle);
    assert_eq!(loco.gait_phase, 0.0);
}

#[test]
fn gait_rate_depends_on_action() {
    // One tick of running vs one tick of sneaking from phase zero.
    let dt = 1.0 / 60.0;

    let mut world = make_world(dt);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    tick(&mut world);
    let (_, _, running) = cat_state(&mut world);
    assert!(approx_eq(running.gait_phase, 12.0 * dt));

    let mut world = make_world(dt);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            sneak: true,
            ..Default::default()
        },
    );
    tick(&mut world);
    let (_, _, sneaking) = cat_state(&mut world);
    assert!(approx_eq(sneaking.gait_phase, 4.0 * dt));
}

#[test]
fn airborne_freezes_gait_phase() {
    let mut world = make_world(1.0 / 60.0);
    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            ..Default::default()
        },
    );
    for _ in 0..30 {
        tick(&mut world);
    }
    let (_, _, before) = cat_state(&mut world);

    set_intents(
        &mut world,
        IntentSnapshot {
            forward: true,
            jump: true,
            ..Default::default()
        },
    );
    tick(&mut world);
    let (_, _, airborne) = cat_state(&mut world);
    assert_eq!(airborne.action, CatAction::Jumping);
    assert_eq!(airborne.gait_phase, before.gait_phase);
}
