//! Audio scheduling backed by a dedicated thread.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns all voice state, and
//!   processes [`AudioCmd`](crate::events::audio::AudioCmd) messages,
//!   emitting [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] pushes ECS command messages into the thread's
//!   channel each tick.
//! - [`poll_audio_messages`] non-blockingly drains the thread's responses
//!   into the ECS message queue.
//!
//! The thread owns no output device here; it schedules envelope timers for
//! each voice (meow, jump, siren, honk, ...) and runs the free-running
//! ambient clock. The synthesis collaborator consumes the resulting
//! [`AudioMessage`] stream. Crucially the channel is one-way fire-and-forget
//! from the simulation's perspective: a wedged or absent audio thread can
//! never stall or corrupt simulation state.
//!
//! The ambient clock ticks every 8 seconds independently of the simulation
//! tick. Each interval makes one uniform draw: high values schedule a
//! distant siren, low values a traffic honk, each at a random pan.

use crate::events::audio::{AudioCmd, AudioMessage, VoiceKind};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res};
use bevy_ecs::system::ResMut;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Seconds between ambient one-shot draws.
const AMBIENT_INTERVAL: Duration = Duration::from_secs(8);
/// Uniform draw above this schedules a siren.
const SIREN_DRAW_THRESHOLD: f32 = 0.85;
/// Uniform draw below this schedules a honk.
const HONK_DRAW_THRESHOLD: f32 = 0.3;
/// How often the thread wakes to prune voices when no commands arrive.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Drain any pending events from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
///
/// Non-blocking; intended to run each tick on the main thread.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per tick to
/// make messages written this tick visible to readers in the same tick.
/// Run this after [`poll_audio_messages`] in your schedule.
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the bridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(*cmd);
    }
}

/// Advance the ECS message queue for AudioCmd so same-tick readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// One scheduled voice with its envelope end time.
struct Voice {
    kind: VoiceKind,
    ends_at: Instant,
}

/// Envelope lengths per voice kind, seconds.
fn voice_duration(kind: VoiceKind) -> f32 {
    match kind {
        VoiceKind::Jump => 0.4,
        VoiceKind::Meow => 0.5,
        VoiceKind::Scratch => 0.6,
        VoiceKind::Groom => 0.8,
        VoiceKind::Siren => 6.0,
        VoiceKind::Honk => 0.3,
    }
}

/// Entry point of the dedicated audio thread.
///
/// Responsibilities:
/// - Own all voice envelope timers, keyed by a monotonically increasing id.
/// - React to [`AudioCmd`] inputs to start/stop voices and the ambient bed.
/// - Emit [`AudioMessage`] outputs for state changes (voice started or
///   finished, ambient started or stopped).
/// - Free-run the 8-second ambient interval while the bed is on.
///
/// Concurrency model: `crossbeam_channel` for lock-free message passing.
/// The loop blocks for at most [`IDLE_POLL`] per iteration so voice pruning
/// and ambient draws stay timely even when no commands arrive.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    info!("Audio thread started");

    let mut rng = fastrand::Rng::new();
    let mut voices: FxHashMap<u64, Voice> = FxHashMap::default();
    let mut next_voice_id: u64 = 0;
    let mut ambient_on = false;
    let mut next_ambient_draw = Instant::now() + AMBIENT_INTERVAL;

    let mut start_voice = |voices: &mut FxHashMap<u64, Voice>,
                           next_voice_id: &mut u64,
                           kind: VoiceKind,
                           pan: f32| {
        let id = *next_voice_id;
        *next_voice_id += 1;
        voices.insert(
            id,
            Voice {
                kind,
                ends_at: Instant::now() + Duration::from_secs_f32(voice_duration(kind)),
            },
        );
        debug!("Voice {id} started: {kind:?} pan {pan:.2}");
        let _ = tx_msg.send(AudioMessage::VoiceStarted { id, kind });
    };

    'run: loop {
        match rx_cmd.recv_timeout(IDLE_POLL) {
            Ok(AudioCmd::Shutdown) => break 'run,
            Ok(AudioCmd::PlayJump) => {
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Jump, 0.0);
            }
            Ok(AudioCmd::PlayMeow) => {
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Meow, 0.0);
            }
            Ok(AudioCmd::PlayScratch) => {
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Scratch, 0.0);
            }
            Ok(AudioCmd::PlayGroom) => {
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Groom, 0.0);
            }
            Ok(AudioCmd::StartAmbient) => {
                if !ambient_on {
                    ambient_on = true;
                    next_ambient_draw = Instant::now() + AMBIENT_INTERVAL;
                    let _ = tx_msg.send(AudioMessage::AmbientStarted);
                }
            }
            Ok(AudioCmd::StopAmbient) => {
                if ambient_on {
                    ambient_on = false;
                    // Drop pending ambient one-shots with the bed.
                    voices.retain(|_, v| {
                        !matches!(v.kind, VoiceKind::Siren | VoiceKind::Honk)
                    });
                    let _ = tx_msg.send(AudioMessage::AmbientStopped);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break 'run,
        }

        let now = Instant::now();

        // Prune voices whose envelope ran out.
        let finished: Vec<u64> = voices
            .iter()
            .filter(|(_, v)| v.ends_at <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in finished {
            voices.remove(&id);
            let _ = tx_msg.send(AudioMessage::VoiceFinished { id });
        }

        // Ambient scheduler, decoupled from the simulation tick.
        if ambient_on && now >= next_ambient_draw {
            next_ambient_draw += AMBIENT_INTERVAL;
            let draw = rng.f32();
            if draw > SIREN_DRAW_THRESHOLD {
                let pan = rng.f32() * 2.0 - 1.0;
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Siren, pan);
            }
            if draw < HONK_DRAW_THRESHOLD {
                let pan = rng.f32() * 2.0 - 1.0;
                start_voice(&mut voices, &mut next_voice_id, VoiceKind::Honk, pan);
            }
        }
    }

    info!("Audio thread shutting down");
}
