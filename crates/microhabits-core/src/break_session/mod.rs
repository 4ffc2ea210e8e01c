mod audio;
mod controller;
mod engine;
mod exercise;
mod ticker;

pub use audio::{
    AudioCue, CueDispatcher, CuePlayer, Note, SilentPlayer, MAX_VOLUME, QUIET_VOLUME, TICK_CUE_INTERVAL_SECS,
};
pub use controller::{BreakController, TICK_PERIOD};
pub use engine::{format_countdown, BreakSessionEngine, SessionState};
pub use exercise::{find_exercise, Exercise, ExerciseKind, EXERCISES};
pub use ticker::Ticker;
