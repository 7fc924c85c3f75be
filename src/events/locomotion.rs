//! Locomotion state-edge events.
//!
//! [`CatJumpedEvent`] fires on the tick the cat's action transitions into
//! jumping (state edge, not while airborne). Collaborators subscribe via
//! observers; the built-in [`observe_cat_jumped`] forwards the edge to the
//! audio thread.

use crate::events::audio::AudioCmd;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event triggered once per launch, on the transition into the jumping
/// action.
#[derive(Event, Debug, Clone, Copy)]
pub struct CatJumpedEvent {
    /// Vertical launch velocity at takeoff, units per second.
    pub launch_velocity: f32,
}

/// Observer that plays the jump sound when the cat leaves the ground.
pub fn observe_cat_jumped(
    trigger: On<CatJumpedEvent>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    debug!(
        "Cat jumped with launch velocity {}",
        trigger.event().launch_velocity
    );
    audio_cmds.write(AudioCmd::PlayJump);
}
