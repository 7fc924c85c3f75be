//! Intent sampling system.
//!
//! [`update_intent_state`] diffs the host-written
//! [`IntentSnapshot`](crate::resources::input::IntentSnapshot) against the
//! previous tick's state each tick and writes the results into
//! [`crate::resources::input::IntentState`]. Press edges of the
//! expression intents (meow/scratch/groom) are additionally published as
//! [`IntentEvent`](crate::events::input::IntentEvent) triggers.

use bevy_ecs::prelude::*;

use crate::events::input::{IntentAction, IntentEvent};
use crate::resources::input::{IntentSnapshot, IntentState};

/// Sample the snapshot into the `IntentState` resource and emit edge events.
pub fn update_intent_state(
    mut intents: ResMut<IntentState>,
    snapshot: Res<IntentSnapshot>,
    mut commands: Commands,
) {
    // Held movement intents: level only, no events.
    intents.forward.sample(snapshot.forward);
    intents.backward.sample(snapshot.backward);
    intents.left.sample(snapshot.left);
    intents.right.sample(snapshot.right);
    intents.jump.sample(snapshot.jump);
    intents.sneak.sample(snapshot.sneak);

    // Expression intents: sample plus press/release events.
    intents.meow.sample(snapshot.meow);
    intents.scratch.sample(snapshot.scratch);
    intents.groom.sample(snapshot.groom);

    for (state, action) in [
        (&intents.meow, IntentAction::Meow),
        (&intents.scratch, IntentAction::Scratch),
        (&intents.groom, IntentAction::Groom),
    ] {
        if state.just_pressed {
            commands.trigger(IntentEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(IntentEvent {
                action,
                pressed: false,
            });
        }
    }
}
