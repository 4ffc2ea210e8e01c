//! Application state store.
//!
//! `AppStore` is the single owner of habits, groups and the user profile.
//! Every mutation rewrites the whole affected document in storage and then
//! notifies subscribers with the new state. A failed write is logged and the
//! in-memory state stays authoritative.

mod seed;

pub use seed::{default_groups, default_habits};

use chrono::{Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::events::Event;
use crate::group::{partition_groups, Group, GroupDraft};
use crate::habit::{CategoryFilter, Habit, HabitDraft};
use crate::profile::UserProfile;
use crate::storage::{load_json, save_json, KeyValueStore, GROUPS_KEY, HABITS_KEY, PROFILE_KEY};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub habits: Vec<Habit>,
    pub groups: Vec<Group>,
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Document {
    Habits,
    Groups,
    Profile,
}

impl Document {
    fn key(&self) -> &'static str {
        match self {
            Document::Habits => HABITS_KEY,
            Document::Groups => GROUPS_KEY,
            Document::Profile => PROFILE_KEY,
        }
    }
}

type Subscriber = Box<dyn Fn(&AppState)>;

pub struct AppStore<S: KeyValueStore> {
    storage: S,
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> AppStore<S> {
    /// Load every document, seeding starter data for missing ones.
    pub fn load(storage: S) -> Self {
        Self::load_as_of(storage, Local::now().date_naive())
    }

    /// Like [`load`](Self::load) with an explicit "today" for the seed data.
    pub fn load_as_of(storage: S, today: NaiveDate) -> Self {
        let now = Utc::now();
        let mut store = Self {
            storage,
            state: AppState::default(),
            subscribers: Vec::new(),
        };

        let (habits, seeded_habits) =
            store.load_document(Document::Habits, || default_habits(today, now));
        let (groups, seeded_groups) = store.load_document(Document::Groups, || default_groups(now));
        let (profile, seeded_profile) = store.load_document(Document::Profile, UserProfile::default);
        store.state = AppState {
            habits,
            groups,
            profile,
        };

        for (seeded, doc) in [
            (seeded_habits, Document::Habits),
            (seeded_groups, Document::Groups),
            (seeded_profile, Document::Profile),
        ] {
            if seeded {
                store.persist(doc);
            }
        }
        store
    }

    /// Returns the decoded document and whether it was freshly seeded.
    fn load_document<T: DeserializeOwned>(&self, doc: Document, seed: impl FnOnce() -> T) -> (T, bool) {
        match load_json(&self.storage, doc.key()) {
            Ok(Some(value)) => (value, false),
            Ok(None) => {
                debug!(key = doc.key(), "seeding default document");
                (seed(), true)
            }
            Err(e) => {
                warn!(key = doc.key(), error = %e, "stored document unreadable, using defaults");
                (seed(), false)
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn habits(&self) -> &[Habit] {
        &self.state.habits
    }

    pub fn groups(&self) -> &[Group] {
        &self.state.groups
    }

    pub fn profile(&self) -> &UserProfile {
        &self.state.profile
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.state.habits.iter().find(|h| h.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.state.groups.iter().find(|g| g.id == id)
    }

    /// Joined groups, then groups matching `filter` the user can still join.
    pub fn groups_by_category(&self, filter: CategoryFilter) -> (Vec<&Group>, Vec<&Group>) {
        partition_groups(&self.state.groups, filter)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a callback invoked with the new state after each mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replace the whole state and persist every document.
    pub fn set_state(&mut self, state: AppState) {
        self.state = state;
        self.persist(Document::Habits);
        self.persist(Document::Groups);
        self.persist(Document::Profile);
        self.notify();
    }

    // ── Habits ───────────────────────────────────────────────────────

    pub fn add_habit(&mut self, draft: &HabitDraft) -> Result<Event, ValidationError> {
        let habit = Habit::create(draft)?;
        let event = Event::HabitCreated {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            at: Utc::now(),
        };
        self.state.habits.push(habit);
        self.commit(Document::Habits);
        Ok(event)
    }

    /// Overwrite the editable fields of habit `id`. `Ok(None)` if unknown.
    pub fn update_habit(&mut self, id: &str, draft: &HabitDraft) -> Result<Option<Event>, ValidationError> {
        let Some(habit) = self.state.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        habit.apply_edit(draft)?;
        self.commit(Document::Habits);
        Ok(Some(Event::HabitUpdated {
            habit_id: id.to_string(),
            at: Utc::now(),
        }))
    }

    pub fn delete_habit(&mut self, id: &str) -> Option<Event> {
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        if self.state.habits.len() == before {
            return None;
        }
        self.commit(Document::Habits);
        Some(Event::HabitDeleted {
            habit_id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Add or remove `day` from habit `id`'s completions.
    pub fn toggle_habit_completion(&mut self, id: &str, day: NaiveDate) -> Option<Event> {
        let habit = self.state.habits.iter_mut().find(|h| h.id == id)?;
        let completed = habit.toggle_completion(day);
        self.commit(Document::Habits);
        Some(Event::HabitCompletionToggled {
            habit_id: id.to_string(),
            day,
            completed,
            at: Utc::now(),
        })
    }

    // ── Groups ───────────────────────────────────────────────────────

    pub fn create_group(&mut self, draft: &GroupDraft) -> Result<Event, ValidationError> {
        let group = Group::create(draft)?;
        let event = Event::GroupCreated {
            group_id: group.id.clone(),
            name: group.name.clone(),
            at: Utc::now(),
        };
        self.state.groups.push(group);
        self.commit(Document::Groups);
        Ok(event)
    }

    pub fn toggle_group_membership(&mut self, id: &str) -> Option<Event> {
        let group = self.state.groups.iter_mut().find(|g| g.id == id)?;
        let joined = group.toggle_membership();
        let members = group.members;
        self.commit(Document::Groups);
        Some(Event::GroupMembershipToggled {
            group_id: id.to_string(),
            joined,
            members,
            at: Utc::now(),
        })
    }

    /// Share a new habit with group `group_id`. `Ok(None)` if unknown.
    pub fn add_group_habit(
        &mut self,
        group_id: &str,
        draft: &HabitDraft,
    ) -> Result<Option<Event>, ValidationError> {
        let Some(group) = self.state.groups.iter_mut().find(|g| g.id == group_id) else {
            return Ok(None);
        };
        let habit_id = group.add_shared_habit(draft)?.id.clone();
        self.commit(Document::Groups);
        Ok(Some(Event::GroupHabitCreated {
            group_id: group_id.to_string(),
            habit_id,
            at: Utc::now(),
        }))
    }

    /// Toggle a shared habit. `None` if the group or habit is unknown or the
    /// user is not a member.
    pub fn toggle_group_habit(&mut self, group_id: &str, habit_id: &str, day: NaiveDate) -> Option<Event> {
        let group = self.state.groups.iter_mut().find(|g| g.id == group_id)?;
        let completed = group.toggle_shared_habit(habit_id, day)?;
        self.commit(Document::Groups);
        Some(Event::GroupHabitToggled {
            group_id: group_id.to_string(),
            habit_id: habit_id.to_string(),
            day,
            completed,
            at: Utc::now(),
        })
    }

    // ── Profile ──────────────────────────────────────────────────────

    pub fn update_profile(&mut self, name: Option<&str>, avatar: Option<&str>) -> Result<Event, ValidationError> {
        self.state.profile.update(name, avatar)?;
        self.commit(Document::Profile);
        Ok(Event::ProfileUpdated {
            name: self.state.profile.name.clone(),
            avatar: self.state.profile.avatar.clone(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn commit(&mut self, doc: Document) {
        self.persist(doc);
        self.notify();
    }

    fn persist(&self, doc: Document) {
        let result = match doc {
            Document::Habits => save_json(&self.storage, doc.key(), &self.state.habits),
            Document::Groups => save_json(&self.storage, doc.key(), &self.state.groups),
            Document::Profile => save_json(&self.storage, doc.key(), &self.state.profile),
        };
        if let Err(e) = result {
            warn!(key = doc.key(), error = %e, "failed to persist document");
        }
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}
