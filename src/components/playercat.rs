use bevy_ecs::prelude::Component;

/// Marker for the single player-controlled cat entity.
///
/// The locomotion, animation, street-stream, and camera systems all query
/// through this marker, so exactly one entity should carry it per session.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerCat;
