//! Per-tick intent state resource.
//!
//! The core never sees key codes. The input collaborator (windowing layer,
//! test harness, demo script) writes a plain-boolean [`IntentSnapshot`] at
//! any point before the tick; the `update_intent_state` system diffs it
//! against the previous tick to produce the [`IntentState`] resource with
//! press/release edges that gameplay systems read.

use bevy_ecs::prelude::*;

/// Boolean intent state with per-tick edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the intent is currently active this tick.
    pub active: bool,
    /// Whether the intent became active this tick.
    pub just_pressed: bool,
    /// Whether the intent stopped being active this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Update `active` from a new sample and derive the edge flags.
    pub fn sample(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Raw intent booleans written by the input collaborator.
///
/// This is the only input surface of the core: a set of named, already
/// debounced booleans. Held intents (movement, sneak, jump) stay true for as
/// long as the player holds them; the vocal/gesture intents are also levels
/// here, with edges derived downstream.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct IntentSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sneak: bool,
    pub meow: bool,
    pub scratch: bool,
    pub groom: bool,
}

/// Resource capturing the per-tick intent state relevant to gameplay.
///
/// Fields are grouped by purpose: movement (forward/backward/left/right),
/// movement modifiers (jump/sneak), and edge-triggered expressions
/// (meow/scratch/groom).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct IntentState {
    pub forward: BoolState,
    pub backward: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub sneak: BoolState,
    pub meow: BoolState,
    pub scratch: BoolState,
    pub groom: BoolState,
}
