//! Intent edge events.
//!
//! This module defines [`IntentEvent`], triggered when an edge-triggered
//! intent (meow, scratch, groom) is pressed or released. The movement
//! intents never produce events; systems read their level from the
//! [`IntentState`](crate::resources::input::IntentState) resource instead.

use bevy_ecs::prelude::*;

/// Edge-triggered intents that produce events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentAction {
    /// Vocalize (default binding on the host: M).
    Meow,
    /// Scratch gesture (default binding: E).
    Scratch,
    /// Grooming gesture (default binding: G).
    Groom,
}

/// Event emitted when an edge-triggered intent is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct IntentEvent {
    /// The intent that changed.
    pub action: IntentAction,
    /// Whether it was a press (true) or release (false).
    pub pressed: bool,
}
