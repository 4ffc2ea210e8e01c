use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::break_session::{AudioCue, SessionState, TICK_CUE_INTERVAL_SECS};

/// Every state change in the system produces an Event.
/// The CLI prints them; `Event::cue` maps some of them to audio cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    HabitCreated {
        habit_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    HabitUpdated {
        habit_id: String,
        at: DateTime<Utc>,
    },
    HabitDeleted {
        habit_id: String,
        at: DateTime<Utc>,
    },
    HabitCompletionToggled {
        habit_id: String,
        day: NaiveDate,
        completed: bool,
        at: DateTime<Utc>,
    },
    GroupCreated {
        group_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    GroupMembershipToggled {
        group_id: String,
        joined: bool,
        members: u32,
        at: DateTime<Utc>,
    },
    GroupHabitCreated {
        group_id: String,
        habit_id: String,
        at: DateTime<Utc>,
    },
    GroupHabitToggled {
        group_id: String,
        habit_id: String,
        day: NaiveDate,
        completed: bool,
        at: DateTime<Utc>,
    },
    ProfileUpdated {
        name: String,
        avatar: String,
        at: DateTime<Utc>,
    },
    SessionStarted {
        exercise_id: String,
        duration_secs: u32,
        step_count: usize,
        at: DateTime<Utc>,
    },
    SessionTicked {
        remaining_secs: u32,
        step_index: usize,
        step_changed: bool,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        exercise_id: String,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    SessionSnapshot {
        state: SessionState,
        exercise_id: Option<String>,
        remaining_secs: u32,
        total_secs: u32,
        step_index: usize,
        instruction: Option<String>,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Audio cue that accompanies this event, if any.
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            Event::SessionStarted { .. } => Some(AudioCue::Start),
            Event::SessionTicked { remaining_secs, .. }
                if *remaining_secs > 0 && remaining_secs % TICK_CUE_INTERVAL_SECS == 0 =>
            {
                Some(AudioCue::Tick)
            }
            Event::SessionCompleted { .. } => Some(AudioCue::Complete),
            Event::HabitCompletionToggled { completed: true, .. }
            | Event::GroupHabitToggled { completed: true, .. } => Some(AudioCue::Success),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(remaining_secs: u32) -> Event {
        Event::SessionTicked {
            remaining_secs,
            step_index: 0,
            step_changed: false,
            at: Utc::now(),
        }
    }

    #[test]
    fn tick_cue_on_multiples_of_ten() {
        assert_eq!(ticked(110).cue(), Some(AudioCue::Tick));
        assert_eq!(ticked(10).cue(), Some(AudioCue::Tick));
        assert_eq!(ticked(119).cue(), None);
        assert_eq!(ticked(0).cue(), None);
    }

    #[test]
    fn success_cue_only_when_marking_done() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let toggled = |completed| Event::HabitCompletionToggled {
            habit_id: "1".into(),
            day,
            completed,
            at: Utc::now(),
        };
        assert_eq!(toggled(true).cue(), Some(AudioCue::Success));
        assert_eq!(toggled(false).cue(), None);

        let group_toggled = |completed| Event::GroupHabitToggled {
            group_id: "2".into(),
            habit_id: "g1".into(),
            day,
            completed,
            at: Utc::now(),
        };
        assert_eq!(group_toggled(true).cue(), Some(AudioCue::Success));
        assert_eq!(group_toggled(false).cue(), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Event::SessionReset { at: Utc::now() }).unwrap();
        assert_eq!(json["type"], "SessionReset");
    }
}
