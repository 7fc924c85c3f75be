//! Locomotion state for the player-controlled cat.
//!
//! The [`Locomotion`] component carries everything the movement integration
//! and the procedural animator need beyond position and heading: the vertical
//! velocity used while airborne, the grounded flag, the gait-phase angle that
//! drives limb cycles, and the current [`CatAction`].
//!
//! Invariant: `grounded == false` implies `action == CatAction::Jumping`. The
//! locomotion system re-derives `action` every tick, so the component never
//! holds a stale state across frames.

use bevy_ecs::prelude::Component;

/// Discrete movement states of the cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatAction {
    #[default]
    Idle,
    Walking,
    Running,
    Jumping,
    Sneaking,
}

/// Per-entity locomotion state, mutated once per tick by the locomotion
/// system and read by the animator and the audio triggers.
#[derive(Component, Clone, Copy, Debug)]
pub struct Locomotion {
    /// Vertical velocity in units per second; only meaningful while airborne.
    pub vertical_velocity: f32,
    /// Whether vertical motion is pinned to the ground plane.
    pub grounded: bool,
    /// Gait cycle angle in radians, always in `[0, 2*PI)`.
    pub gait_phase: f32,
    /// Current movement state, derived after integration each tick.
    pub action: CatAction,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            grounded: true,
            gait_phase: 0.0,
            action: CatAction::Idle,
        }
    }
}
