use bevy_ecs::prelude::Component;
use glam::{Mat3, Vec3};

/// Facing direction around the vertical axis, in radians.
///
/// Positive yaw turns counter-clockwise when seen from above. The local
/// forward axis is -Z, so an entity with yaw 0 walks toward negative z.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Heading {
    pub yaw: f32,
}

impl Heading {
    /// Rotate a local-space vector into world space by this heading's yaw.
    pub fn rotate(&self, local: Vec3) -> Vec3 {
        Mat3::from_rotation_y(self.yaw) * local
    }
}
