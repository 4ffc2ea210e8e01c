//! Habit records and their mutations.
//!
//! A habit keeps its completions as a set of calendar days, so a day can
//! never be recorded twice. Toggling the same day twice restores the set.

mod category;

pub use category::{CategoryFilter, Frequency, HabitCategory};

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Time of day for a habit reminder, stored as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReminderTime(NaiveTime);

impl FromStr for ReminderTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(ReminderTime)
            .map_err(|_| ValidationError::InvalidReminder(s.to_string()))
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Link from a shared habit back to the group that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAffiliation {
    pub group_id: String,
    pub group_name: String,
}

/// A micro-habit tracked by daily or weekly completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub frequency: Frequency,
    pub icon: String,
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<ReminderTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupAffiliation>,
}

/// User-editable fields of a habit, as entered in the add/edit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    pub name: String,
    pub category: HabitCategory,
    pub frequency: Frequency,
    pub icon: String,
    /// Raw `HH:MM` text; blank means no reminder.
    pub reminder_time: Option<String>,
}

impl Default for HabitDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: HabitCategory::Wellbeing,
            frequency: Frequency::Daily,
            icon: DEFAULT_ICON.to_string(),
            reminder_time: None,
        }
    }
}

/// Icons offered by the habit form.
pub const HABIT_ICONS: [&str; 12] = [
    "🧘", "📚", "💪", "🏃", "💧", "🥗", "😴", "✍️", "🎯", "💰", "🎨", "🎵",
];

pub const DEFAULT_ICON: &str = "🧘";

struct ValidDraft {
    name: String,
    icon: String,
    reminder_time: Option<ReminderTime>,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        let icon = match self.icon.trim() {
            "" => DEFAULT_ICON.to_string(),
            icon => icon.to_string(),
        };
        let reminder_time = match self.reminder_time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse()?),
        };
        Ok(ValidDraft {
            name: name.to_string(),
            icon,
            reminder_time,
        })
    }
}

impl Habit {
    /// Create a habit with a fresh id and no completions.
    pub fn create(draft: &HabitDraft) -> Result<Self, ValidationError> {
        let valid = draft.validate()?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: valid.name,
            category: draft.category,
            frequency: draft.frequency,
            icon: valid.icon,
            completed_dates: BTreeSet::new(),
            created_at: Utc::now(),
            reminder_time: valid.reminder_time,
            group: None,
        })
    }

    /// Overwrite the editable fields. Completions, id, creation time and
    /// group affiliation are kept.
    pub fn apply_edit(&mut self, draft: &HabitDraft) -> Result<(), ValidationError> {
        let valid = draft.validate()?;
        self.name = valid.name;
        self.category = draft.category;
        self.frequency = draft.frequency;
        self.icon = valid.icon;
        self.reminder_time = valid.reminder_time;
        Ok(())
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Add `day` if absent, remove it if present. Returns whether the habit
    /// is completed on `day` afterwards.
    pub fn toggle_completion(&mut self, day: NaiveDate) -> bool {
        if self.completed_dates.remove(&day) {
            false
        } else {
            self.completed_dates.insert(day);
            true
        }
    }

    pub fn completion_count(&self) -> usize {
        self.completed_dates.len()
    }

    pub fn belongs_to(&self, group_id: &str) -> bool {
        self.group.as_ref().is_some_and(|g| g.group_id == group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn create_trims_name_and_defaults_icon() {
        let draft = HabitDraft {
            name: "  Beber agua  ".into(),
            icon: "   ".into(),
            ..HabitDraft::default()
        };
        let habit = Habit::create(&draft).unwrap();
        assert_eq!(habit.name, "Beber agua");
        assert_eq!(habit.icon, DEFAULT_ICON);
        assert!(habit.completed_dates.is_empty());
        assert!(habit.group.is_none());
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Habit::create(&HabitDraft::new("   ")).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn create_rejects_bad_reminder() {
        let draft = HabitDraft {
            reminder_time: Some("25:99".into()),
            ..HabitDraft::new("Leer")
        };
        assert!(matches!(
            Habit::create(&draft),
            Err(ValidationError::InvalidReminder(_))
        ));
    }

    #[test]
    fn blank_reminder_means_none() {
        let draft = HabitDraft {
            reminder_time: Some(" ".into()),
            ..HabitDraft::new("Leer")
        };
        assert!(Habit::create(&draft).unwrap().reminder_time.is_none());
    }

    #[test]
    fn toggle_twice_restores_set() {
        let mut habit = Habit::create(&HabitDraft::new("Leer")).unwrap();
        habit.completed_dates.insert(day("2025-03-01"));
        let before = habit.completed_dates.clone();

        assert!(habit.toggle_completion(day("2025-03-02")));
        assert_eq!(habit.completion_count(), 2);
        assert!(!habit.toggle_completion(day("2025-03-02")));
        assert_eq!(habit.completed_dates, before);
    }

    #[test]
    fn edit_keeps_completions_and_identity() {
        let mut habit = Habit::create(&HabitDraft::new("Leer")).unwrap();
        habit.toggle_completion(day("2025-03-02"));
        let id = habit.id.clone();

        let draft = HabitDraft {
            name: "Leer 20 páginas".into(),
            category: HabitCategory::Study,
            frequency: Frequency::Weekly,
            icon: "📚".into(),
            reminder_time: Some("20:00".into()),
        };
        habit.apply_edit(&draft).unwrap();

        assert_eq!(habit.id, id);
        assert_eq!(habit.name, "Leer 20 páginas");
        assert_eq!(habit.category, HabitCategory::Study);
        assert_eq!(habit.frequency, Frequency::Weekly);
        assert_eq!(habit.reminder_time.unwrap().to_string(), "20:00");
        assert!(habit.is_completed_on(day("2025-03-02")));
    }

    #[test]
    fn serializes_in_camel_case() {
        let draft = HabitDraft {
            reminder_time: Some("08:00".into()),
            ..HabitDraft::new("Meditar")
        };
        let mut habit = Habit::create(&draft).unwrap();
        habit.toggle_completion(day("2025-03-02"));
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["completedDates"][0], "2025-03-02");
        assert_eq!(json["reminderTime"], "08:00");
        assert_eq!(json["category"], "wellbeing");
        assert!(json.get("group").is_none());
    }

    #[test]
    fn reads_legacy_document_and_drops_duplicate_days() {
        let json = r#"{
            "id": "1",
            "name": "Meditar 5 minutos",
            "category": "bienestar",
            "frequency": "diario",
            "icon": "🧘",
            "completedDates": ["2025-03-02", "2025-03-01", "2025-03-02"],
            "createdAt": "2025-02-27T10:00:00Z",
            "reminderTime": "08:00"
        }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.category, HabitCategory::Wellbeing);
        assert_eq!(habit.frequency, Frequency::Daily);
        assert_eq!(habit.completion_count(), 2);
    }
}
