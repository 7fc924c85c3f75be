//! Locomotion integration system.
//!
//! Advances the player cat's position, heading, and vertical motion from the
//! current intents, then re-derives the movement action and gait phase.
//! Runs once per tick; everything scales by `WorldTime::delta`.
//!
//! Per-tick order matters and is fixed:
//! 1. longitudinal speed selection from intents
//! 2. yaw update (turning works while stationary)
//! 3. jump trigger and vertical integration
//! 4. horizontal integration along the already-updated heading
//! 5. action derivation and gait phase advance
//!
//! The delta is not clamped; a very large stall delta can tunnel through the
//! ground-plane check in a single step.

use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::heading::Heading;
use crate::components::locomotion::{CatAction, Locomotion};
use crate::components::playercat::PlayerCat;
use crate::components::worldposition::WorldPosition;
use crate::events::locomotion::CatJumpedEvent;
use crate::resources::gameconfig::SimConfig;
use crate::resources::input::IntentState;
use crate::resources::worldtime::WorldTime;

/// Decide the movement action from this tick's integration results.
///
/// Explicit decision table, evaluated in priority order: airborne dominates
/// everything, then the sneak modifier, then the run/walk speed split, then
/// idle.
pub fn derive_action(
    grounded: bool,
    horizontal_speed: f32,
    sneaking: bool,
    config: &SimConfig,
) -> CatAction {
    if !grounded {
        CatAction::Jumping
    } else if horizontal_speed > config.idle_threshold {
        if sneaking {
            CatAction::Sneaking
        } else if horizontal_speed > config.run_threshold {
            CatAction::Running
        } else {
            CatAction::Walking
        }
    } else {
        CatAction::Idle
    }
}

/// Integrate intents into the cat's position, heading, and locomotion state.
pub fn locomotion(
    mut query: Query<(&mut WorldPosition, &mut Heading, &mut Locomotion), With<PlayerCat>>,
    intents: Res<IntentState>,
    config: Res<SimConfig>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let dt = time.delta;

    for (mut position, mut heading, mut loco) in query.iter_mut() {
        let previous_action = loco.action;

        // 1. Longitudinal speed. Sneak caps the speed even when forward is
        // held; without forward/backward the signed speed stays zero.
        let speed = if intents.sneak.active {
            config.sneak_speed
        } else if intents.forward.active || intents.backward.active {
            config.move_speed
        } else {
            0.0
        };
        let signed_speed = if intents.forward.active {
            -speed
        } else if intents.backward.active {
            speed
        } else {
            0.0
        };

        // 2. Yaw, independent of translation.
        if intents.left.active {
            heading.yaw += config.turn_speed * dt;
        }
        if intents.right.active {
            heading.yaw -= config.turn_speed * dt;
        }

        // 3. Jump trigger and vertical integration.
        if intents.jump.active && loco.grounded {
            loco.vertical_velocity = config.jump_velocity;
            loco.grounded = false;
            loco.action = CatAction::Jumping;
        }
        if !loco.grounded {
            position.pos.y += loco.vertical_velocity * dt;
            loco.vertical_velocity -= config.gravity * dt;

            if position.pos.y <= config.ground_height {
                position.pos.y = config.ground_height;
                loco.grounded = true;
                loco.vertical_velocity = 0.0;
            }
        }

        // 4. Horizontal integration along the updated heading, so turning
        // and moving compose within one tick.
        let world_velocity = heading.rotate(Vec3::new(0.0, 0.0, signed_speed));
        position.pos += world_velocity * dt;

        // 5. Action derivation and gait phase.
        let horizontal_speed = signed_speed.abs();
        loco.action = derive_action(
            loco.grounded,
            horizontal_speed,
            intents.sneak.active,
            &config,
        );

        match loco.action {
            CatAction::Walking | CatAction::Running | CatAction::Sneaking => {
                let rate = match loco.action {
                    CatAction::Running => config.gait_rate_run,
                    CatAction::Sneaking => config.gait_rate_sneak,
                    _ => config.gait_rate_walk,
                };
                loco.gait_phase = (loco.gait_phase + rate * dt).rem_euclid(TAU);
            }
            CatAction::Idle => {
                // Reset, not freeze: legs snap back to the rest pose.
                loco.gait_phase = 0.0;
            }
            CatAction::Jumping => {}
        }

        // State edge into jumping fires exactly once per launch.
        if loco.action == CatAction::Jumping && previous_action != CatAction::Jumping {
            commands.trigger(CatJumpedEvent {
                launch_velocity: config.jump_velocity,
            });
        }
    }
}
