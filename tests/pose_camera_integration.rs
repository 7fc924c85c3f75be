//! Procedural pose and follow-camera tests.

use bevy_ecs::prelude::*;
use glam::Vec3;

use streetcat::components::bodypose::{
    BACK_LEFT, BACK_RIGHT, BodyPose, FRONT_LEFT, FRONT_RIGHT,
};
use streetcat::components::heading::Heading;
use streetcat::components::locomotion::{CatAction, Locomotion};
use streetcat::components::playercat::PlayerCat;
use streetcat::components::worldposition::WorldPosition;
use streetcat::resources::camerarig::CameraRig;
use streetcat::resources::gameconfig::SimConfig;
use streetcat::systems::animation::{body_pose, pose_cat};
use streetcat::systems::camera::follow_camera;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn loco(action: CatAction, grounded: bool, phase: f32) -> Locomotion {
    Locomotion {
        vertical_velocity: 0.0,
        grounded,
        gait_phase: phase,
        action,
    }
}

#[test]
fn idle_pose_is_rest_pose() {
    let pose = body_pose(&loco(CatAction::Idle, true, 0.0));
    assert_eq!(pose.body_bob, 0.0);
    for leg in pose.legs {
        assert_eq!(leg.swing, 0.0);
        assert_eq!(leg.lift, 0.0);
    }
    assert_eq!(pose.tail.rotation_x, 0.5);
    assert_eq!(pose.tail.rotation_y, 0.0);
}

#[test]
fn walking_pose_follows_gait_phase() {
    let phase = 1.0;
    let pose = body_pose(&loco(CatAction::Walking, true, phase));

    assert!(approx_eq(pose.body_bob, (phase * 2.0).sin() * 0.03));

    let offsets = [
        (FRONT_LEFT, 0.0),
        (FRONT_RIGHT, std::f32::consts::PI),
        (BACK_LEFT, std::f32::consts::FRAC_PI_2),
        (BACK_RIGHT, std::f32::consts::PI * 1.5),
    ];
    for (index, offset) in offsets {
        let leg = pose.legs[index];
        assert!(approx_eq(leg.swing, (phase + offset).sin() * 0.5));
        assert!(approx_eq(leg.lift, (phase + offset).cos().max(0.0) * 0.12));
        assert!(leg.lift >= 0.0);
    }

    assert!(approx_eq(
        pose.tail.rotation_x,
        0.5 + (phase * 2.0).sin() * 0.2
    ));
    assert!(approx_eq(pose.tail.rotation_y, phase.cos() * 0.3));
}

#[test]
fn front_legs_swing_in_opposition() {
    let pose = body_pose(&loco(CatAction::Running, true, 0.7));
    assert!(approx_eq(
        pose.legs[FRONT_LEFT].swing,
        -pose.legs[FRONT_RIGHT].swing
    ));
}

#[test]
fn airborne_zeroes_legs_but_tail_keeps_swaying() {
    let phase = 1.0;
    let pose = body_pose(&loco(CatAction::Jumping, false, phase));
    assert_eq!(pose.body_bob, 0.0);
    for leg in pose.legs {
        assert_eq!(leg.swing, 0.0);
        assert_eq!(leg.lift, 0.0);
    }
    assert!(approx_eq(pose.tail.rotation_y, phase.cos() * 0.3));
}

#[test]
fn pose_system_writes_component() {
    let mut world = World::new();
    world.spawn((
        PlayerCat,
        loco(CatAction::Walking, true, 0.5),
        BodyPose::default(),
    ));

    let mut schedule = Schedule::default();
    schedule.add_systems(pose_cat);
    schedule.run(&mut world);

    let mut query = world.query_filtered::<&BodyPose, With<PlayerCat>>();
    let pose = query.single(&world).unwrap();
    assert_eq!(*pose, body_pose(&loco(CatAction::Walking, true, 0.5)));
}

fn camera_world(eye: Vec3) -> World {
    let mut world = World::new();
    world.insert_resource(SimConfig::new());
    world.insert_resource(CameraRig {
        eye,
        look_at: Vec3::ZERO,
    });
    world.spawn((
        PlayerCat,
        WorldPosition::new(0.0, 0.25, 0.0),
        Heading::default(),
    ));
    world
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(follow_camera);
    schedule.run(world);
}

#[test]
fn camera_converges_geometrically_to_target() {
    // Static cat at the origin: target eye is (0, 1.45, 3). Start one unit
    // off target; after n ticks the remaining distance is 0.95^n.
    let target = Vec3::new(0.0, 1.45, 3.0);
    let mut world = camera_world(target + Vec3::X);

    for _ in 0..60 {
        tick_camera(&mut world);
    }

    let rig = world.resource::<CameraRig>();
    let remaining = (rig.eye - target).length();
    let expected = 0.95f32.powi(60);
    assert!(
        (remaining - expected).abs() < 1e-3,
        "remaining = {remaining}, expected = {expected}"
    );
}

#[test]
fn camera_lookat_is_hard_set_each_tick() {
    let mut world = camera_world(Vec3::new(10.0, 10.0, 10.0));
    tick_camera(&mut world);

    let rig = world.resource::<CameraRig>();
    assert!((rig.look_at - Vec3::new(0.0, 0.65, -1.5)).length() < EPSILON);
}

#[test]
fn camera_offsets_rotate_with_heading() {
    let mut world = camera_world(Vec3::ZERO);
    {
        let mut query = world.query_filtered::<&mut Heading, With<PlayerCat>>();
        query.single_mut(&mut world).unwrap().yaw = std::f32::consts::FRAC_PI_2;
    }
    tick_camera(&mut world);

    // Yaw +PI/2 swings the forward look offset from -z to -x.
    let rig = world.resource::<CameraRig>();
    assert!((rig.look_at - Vec3::new(-1.5, 0.65, 0.0)).length() < EPSILON);
}
