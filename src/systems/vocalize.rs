//! Expression intent observer.
//!
//! Maps press edges of the meow/scratch/groom intents to audio commands.
//! These are input-edge triggered, independent of the movement state
//! machine: the cat can meow mid-jump or mid-sprint.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::audio::AudioCmd;
use crate::events::input::{IntentAction, IntentEvent};

/// Observer that forwards expression presses to the audio thread.
pub fn vocalize_observer(trigger: On<IntentEvent>, mut audio_cmds: MessageWriter<AudioCmd>) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let cmd = match event.action {
        IntentAction::Meow => AudioCmd::PlayMeow,
        IntentAction::Scratch => AudioCmd::PlayScratch,
        IntentAction::Groom => AudioCmd::PlayGroom,
    };
    debug!("Expression intent {:?} -> {:?}", event.action, cmd);
    audio_cmds.write(cmd);
}
