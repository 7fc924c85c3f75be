//! Street streaming system.
//!
//! Extends the segment chain ahead of the cat and lets the window evict the
//! oldest segments. Runs once per tick after locomotion.
//!
//! At most one segment is appended per tick even if the cat crossed more
//! than one trigger distance since the last tick (teleport, stall delta).
//! There is deliberately no catch-up loop; the chain can lag briefly behind
//! a fast mover.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::playercat::PlayerCat;
use crate::components::worldposition::WorldPosition;
use crate::resources::gameconfig::SimConfig;
use crate::resources::street::StreetStream;

/// Append a segment when the cat is within trigger distance of the chain
/// tail, then evict down to the window capacity.
pub fn stream_street(
    mut stream: ResMut<StreetStream>,
    config: Res<SimConfig>,
    query: Query<&WorldPosition, With<PlayerCat>>,
) {
    let Ok(position) = query.single() else {
        return;
    };

    let distance = position.pos.distance(stream.last_origin);
    if distance < config.trigger_distance {
        let segment = stream.append_next(config.segment_length, config.window_capacity);
        debug!(
            "Street segment {} appended at {:?} yaw {:.2} (cat {:.1} units from previous tail, {} live)",
            segment.id,
            segment.origin,
            segment.yaw,
            distance,
            stream.window.len()
        );
    }
}
