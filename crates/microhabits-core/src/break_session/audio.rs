//! Audio cues for break sessions and habit completions.
//!
//! Playback is best-effort: a failing player is logged and otherwise
//! ignored, and muting only suppresses playback.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::events::Event;

/// Seconds between "tick" cues while a session runs.
pub const TICK_CUE_INTERVAL_SECS: u32 = 10;

/// Volume (0..=100) below which tick cues are dropped. Zero silences all cues.
pub const QUIET_VOLUME: u32 = 30;

pub const MAX_VOLUME: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    Start,
    Tick,
    Complete,
    Success,
}

/// A single tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

const START_NOTES: [Note; 1] = [Note { frequency_hz: 440.0, duration_ms: 200 }];
const TICK_NOTES: [Note; 1] = [Note { frequency_hz: 880.0, duration_ms: 60 }];
// C5, E5, G5
const COMPLETE_NOTES: [Note; 3] = [
    Note { frequency_hz: 523.25, duration_ms: 150 },
    Note { frequency_hz: 659.25, duration_ms: 150 },
    Note { frequency_hz: 783.99, duration_ms: 300 },
];
// E5, A5
const SUCCESS_NOTES: [Note; 2] = [
    Note { frequency_hz: 659.25, duration_ms: 100 },
    Note { frequency_hz: 880.0, duration_ms: 200 },
];

impl AudioCue {
    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::Start => "start",
            AudioCue::Tick => "tick",
            AudioCue::Complete => "complete",
            AudioCue::Success => "success",
        }
    }

    pub fn notes(&self) -> &'static [Note] {
        match self {
            AudioCue::Start => &START_NOTES,
            AudioCue::Tick => &TICK_NOTES,
            AudioCue::Complete => &COMPLETE_NOTES,
            AudioCue::Success => &SUCCESS_NOTES,
        }
    }
}

/// Output device for cues.
pub trait CuePlayer: Send {
    fn play(&self, cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Player that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&self, _cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

/// Routes events to a player, honouring the mute switch and volume.
pub struct CueDispatcher {
    player: Box<dyn CuePlayer>,
    muted: bool,
    volume: u32,
}

impl CueDispatcher {
    pub fn new(player: Box<dyn CuePlayer>, muted: bool) -> Self {
        Self { player, muted, volume: MAX_VOLUME }
    }

    /// Clamped to `MAX_VOLUME`.
    pub fn with_volume(mut self, volume: u32) -> Self {
        self.volume = volume.min(MAX_VOLUME);
        self
    }

    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Whether `cue` is audible at the current mute and volume settings.
    pub fn is_audible(&self, cue: AudioCue) -> bool {
        if self.muted || self.volume == 0 {
            return false;
        }
        cue != AudioCue::Tick || self.volume >= QUIET_VOLUME
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play the cue for `event`, if it has one. Returns the cue that was
    /// attempted.
    pub fn dispatch(&self, event: &Event) -> Option<AudioCue> {
        let cue = event.cue()?;
        if !self.is_audible(cue) {
            return None;
        }
        if let Err(e) = self.player.play(cue) {
            warn!(cue = cue.name(), error = %e, "audio cue failed");
        }
        Some(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<AudioCue>>>);

    impl CuePlayer for Recorder {
        fn play(&self, cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.0.lock().unwrap().push(cue);
            Ok(())
        }
    }

    struct Broken;

    impl CuePlayer for Broken {
        fn play(&self, _cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("no audio device".into())
        }
    }

    fn completed() -> Event {
        Event::SessionCompleted {
            exercise_id: "breathing".into(),
            at: Utc::now(),
        }
    }

    #[test]
    fn complete_cue_is_three_ascending_notes() {
        let notes = AudioCue::Complete.notes();
        assert_eq!(notes.len(), 3);
        assert!(notes.windows(2).all(|w| w[0].frequency_hz < w[1].frequency_hz));
    }

    #[test]
    fn muted_dispatcher_plays_nothing() {
        let recorder = Recorder::default();
        let mut dispatcher = CueDispatcher::new(Box::new(recorder.clone()), true);
        assert_eq!(dispatcher.dispatch(&completed()), None);
        assert!(recorder.0.lock().unwrap().is_empty());

        dispatcher.set_muted(false);
        assert_eq!(dispatcher.dispatch(&completed()), Some(AudioCue::Complete));
        assert_eq!(*recorder.0.lock().unwrap(), vec![AudioCue::Complete]);
    }

    #[test]
    fn low_volume_drops_ticks_only() {
        let recorder = Recorder::default();
        let dispatcher = CueDispatcher::new(Box::new(recorder.clone()), false).with_volume(10);
        let tick = Event::SessionTicked {
            remaining_secs: 60,
            step_index: 0,
            step_changed: false,
            at: Utc::now(),
        };
        assert_eq!(dispatcher.dispatch(&tick), None);
        assert_eq!(dispatcher.dispatch(&completed()), Some(AudioCue::Complete));
        assert_eq!(*recorder.0.lock().unwrap(), vec![AudioCue::Complete]);
    }

    #[test]
    fn zero_volume_acts_as_mute() {
        let dispatcher = CueDispatcher::new(Box::new(SilentPlayer), false).with_volume(0);
        assert!(!dispatcher.is_muted());
        assert!(!dispatcher.is_audible(AudioCue::Complete));
        assert_eq!(dispatcher.dispatch(&completed()), None);
        assert_eq!(CueDispatcher::new(Box::new(SilentPlayer), false).with_volume(250).volume(), MAX_VOLUME);
    }

    #[test]
    fn player_failures_are_swallowed() {
        let dispatcher = CueDispatcher::new(Box::new(Broken), false);
        assert_eq!(dispatcher.dispatch(&completed()), Some(AudioCue::Complete));
    }
}
