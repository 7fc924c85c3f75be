use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
///
/// All commands are fire-and-forget triggers; the thread schedules its own
/// envelope timers and never blocks the sender.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCmd {
    /// One-shot jump whoosh, triggered on the state edge into jumping.
    PlayJump,
    /// One-shot meow, triggered on the meow intent press edge.
    PlayMeow,
    /// One-shot scratching rasp.
    PlayScratch,
    /// One-shot grooming lick.
    PlayGroom,
    /// Start the ambient city bed (rumble loop plus the periodic
    /// siren/honk scheduler).
    StartAmbient,
    /// Stop the ambient city bed and silence pending ambient one-shots.
    StopAmbient,
    Shutdown,
}

/// Kinds of one-shot voices the audio thread schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceKind {
    Jump,
    Meow,
    Scratch,
    Groom,
    Siren,
    Honk,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone, Copy)]
pub enum AudioMessage {
    AmbientStarted,
    AmbientStopped,
    VoiceStarted { id: u64, kind: VoiceKind },
    VoiceFinished { id: u64 },
}
