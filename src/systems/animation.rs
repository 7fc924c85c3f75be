//! Procedural body animation.
//!
//! [`body_pose`] derives the whole body pose from the locomotion state and
//! gait phase alone; it is a pure function and safe to call at any rate
//! independent of the simulation tick. [`pose_cat`] is the per-tick system
//! wrapper that writes the result into the cat's
//! [`BodyPose`](crate::components::bodypose::BodyPose) component.
//!
//! The four legs run on fixed phase offsets that produce a diagonal,
//! trot-like cycle rather than a strict quadruped walk sequence. That
//! simplification is intentional; do not "correct" it toward biomechanical
//! accuracy, the renderer is tuned for this cycle.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy_ecs::prelude::*;

use crate::components::bodypose::{BodyPose, LegPose, TailPose};
use crate::components::locomotion::{CatAction, Locomotion};
use crate::components::playercat::PlayerCat;

/// Per-leg gait phase offsets: front-left, front-right, back-left,
/// back-right.
pub const LEG_PHASE_OFFSETS: [f32; 4] = [0.0, PI, FRAC_PI_2, PI + FRAC_PI_2];

/// Vertical body bob amplitude, world units.
const BOB_AMPLITUDE: f32 = 0.03;
/// Leg swing amplitude, radians.
const SWING_AMPLITUDE: f32 = 0.5;
/// Leg lift height, world units.
const LIFT_HEIGHT: f32 = 0.12;
/// Resting pitch of the tail root, radians.
const TAIL_REST_PITCH: f32 = 0.5;
const TAIL_SWAY_PITCH: f32 = 0.2;
const TAIL_SWAY_YAW: f32 = 0.3;

/// Derive the body pose for one frame from locomotion state.
pub fn body_pose(loco: &Locomotion) -> BodyPose {
    let moving = loco.action != CatAction::Idle;
    // Legs and bob stop mid-air; the tail keeps swaying while jumping.
    let stepping = moving && loco.grounded;
    let phase = loco.gait_phase;

    let body_bob = if stepping {
        (phase * 2.0).sin() * BOB_AMPLITUDE
    } else {
        0.0
    };

    let mut legs = [LegPose::default(); 4];
    if stepping {
        for (leg, offset) in legs.iter_mut().zip(LEG_PHASE_OFFSETS) {
            leg.swing = (phase + offset).sin() * SWING_AMPLITUDE;
            leg.lift = (phase + offset).cos().max(0.0) * LIFT_HEIGHT;
        }
    }

    let tail = TailPose {
        rotation_x: TAIL_REST_PITCH
            + if moving {
                (phase * 2.0).sin() * TAIL_SWAY_PITCH
            } else {
                0.0
            },
        rotation_y: if moving { phase.cos() * TAIL_SWAY_YAW } else { 0.0 },
    };

    BodyPose {
        body_bob,
        legs,
        tail,
    }
}

/// Write the derived pose into the cat's `BodyPose` component.
pub fn pose_cat(mut query: Query<(&Locomotion, &mut BodyPose), With<PlayerCat>>) {
    for (loco, mut pose) in query.iter_mut() {
        *pose = body_pose(loco);
    }
}
