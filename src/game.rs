//! High-level game setup and per-session lifecycle.
//!
//! The world is built once per process by [`build_world`]; per-session state
//! (the cat entity, the street window, the camera pose, the intent state) is
//! spawned by [`spawn_session`] when the game enters Playing and torn down
//! by the state-change observer when it leaves. Nothing persists across
//! sessions except the observers and the audio bridge.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::bodypose::BodyPose;
use crate::components::heading::Heading;
use crate::components::locomotion::Locomotion;
use crate::components::persistent::Persistent;
use crate::components::playercat::PlayerCat;
use crate::components::worldposition::WorldPosition;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::locomotion::observe_cat_jumped;
use crate::resources::audio::setup_audio;
use crate::resources::camerarig::CameraRig;
use crate::resources::customization::CatCustomization;
use crate::resources::gameconfig::SimConfig;
use crate::resources::gamestate::{GameState, NextGameState};
use crate::resources::input::{IntentSnapshot, IntentState};
use crate::resources::street::{RandomTurns, StreetStream};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::pose_cat;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::camera::follow_camera;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_intent_state;
use crate::systems::locomotion::locomotion;
use crate::systems::street::stream_street;
use crate::systems::time::update_world_time;
use crate::systems::vocalize::vocalize_observer;

/// Build the ECS world with all global resources and observers installed.
///
/// The returned world is in the `None` game state; request a transition to
/// `Playing` via [`NextGameState`] to start a session.
pub fn build_world(config: SimConfig, customization: CatCustomization) -> World {
    let mut world = World::new();

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config);
    world.insert_resource(customization);
    world.insert_resource(IntentSnapshot::default());
    world.insert_resource(IntentState::default());

    // Audio must be up before any session can emit commands.
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_cat_jumped), Persistent));
    world.spawn((Observer::new(vocalize_observer), Persistent));
    // Ensure observers are registered before any system triggers events.
    world.flush();

    world
}

/// Spawn per-session state: the cat at the street origin, a freshly seeded
/// street window, the camera, and cleared intent state.
pub fn spawn_session(commands: &mut Commands, config: &SimConfig) {
    commands.spawn((
        PlayerCat,
        WorldPosition::new(0.0, config.ground_height, 0.0),
        Heading::default(),
        Locomotion::default(),
        BodyPose::default(),
    ));
    commands.insert_resource(StreetStream::seeded(
        config.segment_length,
        Box::new(RandomTurns::new(config.turn_probability)),
    ));
    commands.insert_resource(CameraRig::default());
    commands.insert_resource(IntentSnapshot::default());
    commands.insert_resource(IntentState::default());
}

/// Build the per-tick schedule.
///
/// Ordering per tick: intents first, then pending state transitions, then
/// the audio bridge pumps, then locomotion and its three consumers
/// (animator, street stream, camera). The consumers only need to run after
/// locomotion; they are independent of each other.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.add_systems(update_intent_state);
    schedule.add_systems(check_pending_state.after(update_intent_state));
    schedule.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    schedule.add_systems(
        locomotion
            .run_if(state_is_playing)
            .after(update_intent_state)
            .after(check_pending_state),
    );
    schedule.add_systems(pose_cat.run_if(state_is_playing).after(locomotion));
    schedule.add_systems(stream_street.run_if(state_is_playing).after(locomotion));
    schedule.add_systems(follow_camera.run_if(state_is_playing).after(locomotion));

    schedule
}

/// Advance the simulation by one tick of `dt` seconds.
pub fn run_tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
