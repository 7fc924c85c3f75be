use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Shared third-person camera pose, written by the camera system and read by
/// the render collaborator.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRig {
    /// Smoothed eye position.
    pub eye: Vec3,
    /// Hard-set look-at target.
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        // Matches the spawn-time camera placement behind and above the cat.
        Self {
            eye: Vec3::new(0.0, 2.0, 5.0),
            look_at: Vec3::ZERO,
        }
    }
}
