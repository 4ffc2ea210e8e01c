//! Community groups and their shared habits.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::{CategoryFilter, GroupAffiliation, Habit, HabitCategory, HabitDraft};

pub const INVITE_BASE_URL: &str = "https://microhabits.app/invite/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: HabitCategory,
    pub members: u32,
    pub active_today: u32,
    pub created_at: DateTime<Utc>,
    pub is_joined: bool,
    /// Habits shared with every member. Each one's affiliation names this group.
    #[serde(default)]
    pub habits: Vec<Habit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub category: HabitCategory,
}

impl Group {
    /// A new group always starts with its creator as the only member.
    pub fn create(draft: &GroupDraft) -> Result<Self, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            members: 1,
            active_today: 1,
            created_at: Utc::now(),
            is_joined: true,
            habits: Vec::new(),
        })
    }

    /// Join if not a member, leave otherwise. Returns the new membership flag.
    pub fn toggle_membership(&mut self) -> bool {
        self.is_joined = !self.is_joined;
        if self.is_joined {
            self.members += 1;
        } else {
            self.members = self.members.saturating_sub(1);
        }
        self.is_joined
    }

    pub fn affiliation(&self) -> GroupAffiliation {
        GroupAffiliation {
            group_id: self.id.clone(),
            group_name: self.name.clone(),
        }
    }

    /// Create a habit owned by this group.
    pub fn add_shared_habit(&mut self, draft: &HabitDraft) -> Result<&Habit, ValidationError> {
        let mut habit = Habit::create(draft)?;
        habit.group = Some(self.affiliation());
        self.habits.push(habit);
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Toggle a shared habit for `day`. Only members may complete shared
    /// habits; returns `None` when not joined or the habit is unknown.
    pub fn toggle_shared_habit(&mut self, habit_id: &str, day: NaiveDate) -> Option<bool> {
        if !self.is_joined {
            return None;
        }
        self.habits
            .iter_mut()
            .find(|h| h.id == habit_id)
            .map(|h| h.toggle_completion(day))
    }

    pub fn invite_link(&self) -> String {
        format!("{INVITE_BASE_URL}{}", self.id)
    }

    pub fn invite_title(&self) -> String {
        format!("Invitación a {}", self.name)
    }

    pub fn invite_text(&self) -> String {
        format!(
            "¡Únete a mi grupo \"{}\" en MicroHabits! 🎯\n\nCrece tus hábitos junto a una comunidad motivada.\n\n{}",
            self.name,
            self.invite_link()
        )
    }
}

/// Groups the user has joined and groups available to join, the latter
/// narrowed by `filter`.
pub fn partition_groups(groups: &[Group], filter: CategoryFilter) -> (Vec<&Group>, Vec<&Group>) {
    let joined = groups.iter().filter(|g| g.is_joined).collect();
    let available = groups
        .iter()
        .filter(|g| !g.is_joined && filter.matches(g.category))
        .collect();
    (joined, available)
}
