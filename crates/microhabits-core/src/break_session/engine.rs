//! Break session state machine.
//!
//! The engine is pure: it has no timer of its own. Whoever drives it calls
//! `tick()` once per elapsed second while the session is running (see
//! [`BreakController`](super::BreakController)).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!            |
//!            v
//!         Complete -> Idle (reset)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::exercise::{Exercise, EXERCISES};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Paused,
    Complete,
}

#[derive(Debug, Clone)]
pub struct BreakSessionEngine {
    catalog: &'static [Exercise],
    exercise: Option<&'static Exercise>,
    state: SessionState,
    remaining_secs: u32,
    step_index: usize,
}

impl BreakSessionEngine {
    /// Engine over the built-in exercise catalog.
    pub fn new() -> Self {
        Self::with_catalog(&EXERCISES)
    }

    pub fn with_catalog(catalog: &'static [Exercise]) -> Self {
        Self {
            catalog,
            exercise: None,
            state: SessionState::Idle,
            remaining_secs: 0,
            step_index: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn exercise(&self) -> Option<&'static Exercise> {
        self.exercise
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn total_secs(&self) -> u32 {
        self.exercise.map(|e| e.duration_secs).unwrap_or(0)
    }

    pub fn instruction(&self) -> Option<&'static str> {
        self.exercise
            .and_then(|e| e.instructions.get(self.step_index).copied())
    }

    /// 0.0 .. 100.0 elapsed share of the exercise.
    pub fn progress_pct(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.remaining_secs) / f64::from(total) * 100.0
    }

    pub fn snapshot(&self) -> Event {
        Event::SessionSnapshot {
            state: self.state,
            exercise_id: self.exercise.map(|e| e.id.to_string()),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            step_index: self.step_index,
            instruction: self.instruction().map(str::to_string),
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the exercise with `exercise_id`. Unknown ids leave the engine
    /// untouched.
    pub fn start(&mut self, exercise_id: &str) -> Option<Event> {
        let Some(exercise) = self.catalog.iter().find(|e| e.id == exercise_id) else {
            debug!(exercise_id, "ignoring start for unknown exercise");
            return None;
        };
        self.exercise = Some(exercise);
        self.remaining_secs = exercise.duration_secs;
        self.step_index = 0;
        self.state = if exercise.duration_secs > 0 {
            SessionState::Running
        } else {
            SessionState::Complete
        };
        debug!(exercise_id, duration_secs = exercise.duration_secs, "break session started");
        Some(Event::SessionStarted {
            exercise_id: exercise.id.to_string(),
            duration_secs: exercise.duration_secs,
            step_count: exercise.step_count(),
            at: Utc::now(),
        })
    }

    /// Running <-> Paused. No-op when idle or complete.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                Some(Event::SessionPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            SessionState::Paused => {
                self.state = SessionState::Running;
                Some(Event::SessionResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            SessionState::Idle | SessionState::Complete => None,
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.exercise = None;
        self.state = SessionState::Idle;
        self.remaining_secs = 0;
        self.step_index = 0;
        Some(Event::SessionReset { at: Utc::now() })
    }

    /// Advance one second. Only has an effect while running.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        let exercise = self.exercise?;
        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        // Recomputed from elapsed time rather than accumulated.
        let previous_step = self.step_index;
        self.step_index = exercise.step_at(exercise.duration_secs - self.remaining_secs);

        if self.remaining_secs == 0 {
            self.state = SessionState::Complete;
            debug!(exercise_id = exercise.id, "break session complete");
            return Some(Event::SessionCompleted {
                exercise_id: exercise.id.to_string(),
                at: Utc::now(),
            });
        }
        Some(Event::SessionTicked {
            remaining_secs: self.remaining_secs,
            step_index: self.step_index,
            step_changed: self.step_index != previous_step,
            at: Utc::now(),
        })
    }
}

impl Default for BreakSessionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as `M:SS`.
pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
