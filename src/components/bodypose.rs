//! Procedural body pose output.
//!
//! [`BodyPose`] is a flat bundle of per-part transforms derived from
//! [`Locomotion`](super::locomotion::Locomotion) by the animation system.
//! It is purely presentational: the render collaborator reads it to place
//! body, legs, and tail; nothing in the simulation reads it back.

use bevy_ecs::prelude::Component;

/// Pose of a single leg.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LegPose {
    /// Rotation about the leg's local horizontal axis, in radians.
    pub swing: f32,
    /// Vertical lift of the leg root, in world units.
    pub lift: f32,
}

/// Pose of the tail root.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TailPose {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

/// Leg order used by [`BodyPose::legs`].
pub const FRONT_LEFT: usize = 0;
pub const FRONT_RIGHT: usize = 1;
pub const BACK_LEFT: usize = 2;
pub const BACK_RIGHT: usize = 3;

/// Flat per-part transform set for one animation frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPose {
    /// Vertical body offset from the walking bob, in world units.
    pub body_bob: f32,
    /// Per-leg poses, indexed by [`FRONT_LEFT`] .. [`BACK_RIGHT`].
    pub legs: [LegPose; 4],
    pub tail: TailPose,
}
