//! # MicroHabits Core Library
//!
//! Core logic for the MicroHabits tracker. The `microhabits` CLI is a thin
//! layer over this crate; every operation it exposes lives here.
//!
//! ## Architecture
//!
//! - **Habits & groups**: records, drafts and validation
//! - **Stats**: streaks, badges and summaries, recomputed from the current
//!   snapshot on every read
//! - **Break sessions**: a tick-driven state machine plus a tokio ticker
//!   and audio cue dispatch
//! - **Store**: owns the application state and rewrites one JSON document
//!   per mutation through a [`KeyValueStore`]
//! - **Storage**: SQLite-backed key/value documents and TOML configuration
//!
//! ## Key Components
//!
//! - [`StreakCalculator`]: consecutive-day streaks
//! - [`BreakSessionEngine`]: guided break state machine
//! - [`BreakController`]: engine + ticker + cues
//! - [`AppStore`]: state owner with save-on-mutation
//! - [`Database`]: document persistence
//! - [`Config`]: application configuration management

pub mod break_session;
pub mod error;
pub mod events;
pub mod group;
pub mod habit;
pub mod profile;
pub mod share;
pub mod stats;
pub mod storage;
pub mod store;

pub use break_session::{
    AudioCue, BreakController, BreakSessionEngine, CueDispatcher, CuePlayer, Exercise, SessionState,
    EXERCISES,
};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use group::{Group, GroupDraft};
pub use habit::{CategoryFilter, Frequency, Habit, HabitCategory, HabitDraft, DEFAULT_ICON, HABIT_ICONS};
pub use profile::{PremiumPlan, SubscriptionReceipt, UserProfile, PREMIUM_PLANS};
pub use share::{share_invite, Clipboard, ShareOutcome, ShareSheet};
pub use stats::{ProfileSummary, StreakCalculator};
pub use storage::{Config, Database, KeyValueStore};
pub use store::{AppState, AppStore};
