//! Sound cue interface
//!
//! The simulation never touches an audio device; it only names cues. The
//! host supplies a `SoundPlayer` and may drop cues on the floor (muted,
//! missing asset) without the simulation noticing.

/// Identifiers for the fire-and-forget sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player fired a shot
    Shot,
    /// Something blew up (enemy kill, player hit, bomb blast)
    Explosion,
    /// Power-up or bomb pickup appeared or was collected
    PowerUp,
    /// The run ended
    GameOver,
}

/// Fire-and-forget cue playback; no return value, no ordering guarantee
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue; useful for tests and headless runs
#[derive(Debug, Default)]
pub struct NullAudio;

impl SoundPlayer for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
