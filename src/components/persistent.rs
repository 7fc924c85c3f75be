//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive session teardown when
//! the game returns to the menu. Use it for observers and other global
//! infrastructure; the cat and other per-session entities never carry it.

use bevy_ecs::prelude::Component;

/// Tag component for entities that must not be despawned between sessions.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
