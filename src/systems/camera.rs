//! Third-person follow camera system.
//!
//! Places the eye behind and above the cat in its local frame and aims
//! slightly ahead of it. The eye position is exponentially smoothed with a
//! fixed per-tick factor; the smoothing is therefore coupled to tick rate,
//! not wall-clock time. The look-at target is hard-set every tick.

use bevy_ecs::prelude::*;

use crate::components::heading::Heading;
use crate::components::playercat::PlayerCat;
use crate::components::worldposition::WorldPosition;
use crate::resources::camerarig::CameraRig;
use crate::resources::gameconfig::SimConfig;

/// Smooth the camera eye toward its target pose and re-aim the look-at.
pub fn follow_camera(
    mut rig: ResMut<CameraRig>,
    config: Res<SimConfig>,
    query: Query<(&WorldPosition, &Heading), With<PlayerCat>>,
) {
    let Ok((position, heading)) = query.single() else {
        return;
    };

    let target_eye = position.pos + heading.rotate(config.camera_eye_offset);
    let target_look = position.pos + heading.rotate(config.camera_look_offset);

    rig.eye = rig.eye.lerp(target_eye, config.camera_lerp);
    rig.look_at = target_look;
}
