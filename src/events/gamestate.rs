//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs session setup/teardown.
//!
//! This decouples the intent to change state from the mechanics of spawning
//! and despawning session state and avoids borrowing conflicts.

use crate::components::persistent::Persistent;
use crate::events::audio::AudioCmd;
use crate::game;
use crate::resources::gameconfig::SimConfig;
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs exit/enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - runs teardown for the previous state (leaving Playing despawns all
///     non-[`Persistent`] entities and stops the ambient bed; no session
///     state survives back to the menu)
///   - runs setup for the new state (entering Playing spawns a fresh cat,
///     reseeds the street, and starts the ambient bed)
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    config: Res<SimConfig>,
    session_entities: Query<Entity, Without<Persistent>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                let old_state = game_state.get().clone();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state.clone());
                next_game_state.reset();

                if old_state == GameStates::Playing {
                    audio_cmds.write(AudioCmd::StopAmbient);
                    for entity in session_entities.iter() {
                        commands.entity(entity).despawn();
                    }
                    commands.remove_resource::<crate::resources::street::StreetStream>();
                    commands.remove_resource::<crate::resources::camerarig::CameraRig>();
                }
                if new_state == GameStates::Playing {
                    game::spawn_session(&mut commands, &config);
                    audio_cmds.write(AudioCmd::StartAmbient);
                }
                if new_state == GameStates::Quitting {
                    debug!("Quit requested; session will not be respawned");
                }
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}
