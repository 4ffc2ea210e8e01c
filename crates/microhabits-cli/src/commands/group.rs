use std::cell::RefCell;

use clap::Subcommand;
use microhabits_core::{
    share_invite, AppStore, CategoryFilter, Clipboard, Database, Frequency, Group, GroupDraft,
    HabitCategory, HabitDraft, ShareOutcome,
};
use serde::Serialize;

use super::{open_store, parse_day, play_cue, print_json, CliResult};

#[derive(Subcommand)]
pub enum GroupAction {
    /// List joined groups and groups available to join
    List {
        /// Category filter for available groups
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Create a group; the creator joins it
    Create {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "study")]
        category: HabitCategory,
    },
    /// Join a group
    Join { id: String },
    /// Leave a group
    Leave { id: String },
    /// Print the invitation for a group
    Share { id: String },
    /// Add a shared habit to a group
    HabitAdd {
        group_id: String,
        name: String,
        #[arg(long, default_value = "wellbeing")]
        category: HabitCategory,
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Mark or unmark a shared habit as done (members only)
    HabitToggle {
        group_id: String,
        habit_id: String,
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Serialize)]
struct GroupList<'a> {
    joined: Vec<&'a Group>,
    available: Vec<&'a Group>,
}

#[derive(Serialize)]
struct Invite {
    outcome: ShareOutcome,
    link: String,
    text: Option<String>,
}

/// A terminal has no clipboard; the copied text is handed back for output.
#[derive(Default)]
struct CapturedClipboard {
    text: RefCell<Option<String>>,
}

impl Clipboard for CapturedClipboard {
    fn copy(&self, text: &str) -> Result<(), String> {
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

pub fn run(action: GroupAction) -> CliResult {
    let mut store = open_store()?;

    match action {
        GroupAction::List { category } => {
            let (joined, available) = store.groups_by_category(category);
            print_json(&GroupList { joined, available })?;
        }
        GroupAction::Create {
            name,
            description,
            category,
        } => {
            let event = store.create_group(&GroupDraft {
                name,
                description,
                category,
            })?;
            print_json(&event)?;
        }
        GroupAction::Join { id } => set_membership(&mut store, &id, true)?,
        GroupAction::Leave { id } => set_membership(&mut store, &id, false)?,
        GroupAction::Share { id } => {
            let group = store.group(&id).ok_or_else(|| format!("group not found: {id}"))?;
            let clipboard = CapturedClipboard::default();
            let outcome = share_invite(group, None, &clipboard);
            print_json(&Invite {
                outcome,
                link: group.invite_link(),
                text: clipboard.text.into_inner(),
            })?;
        }
        GroupAction::HabitAdd {
            group_id,
            name,
            category,
            frequency,
            icon,
        } => {
            let mut draft = HabitDraft::new(name);
            draft.category = category;
            draft.frequency = frequency;
            if let Some(icon) = icon {
                draft.icon = icon;
            }
            let event = store
                .add_group_habit(&group_id, &draft)?
                .ok_or_else(|| format!("group not found: {group_id}"))?;
            print_json(&event)?;
        }
        GroupAction::HabitToggle {
            group_id,
            habit_id,
            date,
        } => {
            let day = parse_day(date.as_deref())?;
            let event = store
                .toggle_group_habit(&group_id, &habit_id, day)
                .ok_or_else(|| format!("cannot toggle {habit_id}: unknown habit or not a member of {group_id}"))?;
            play_cue(&event);
            print_json(&event)?;
        }
    }
    Ok(())
}

fn set_membership(store: &mut AppStore<Database>, id: &str, join: bool) -> CliResult {
    let group = store.group(id).ok_or_else(|| format!("group not found: {id}"))?;
    if group.is_joined == join {
        let state = if join { "already a member of" } else { "not a member of" };
        return Err(format!("{state} {id}").into());
    }
    if let Some(event) = store.toggle_group_membership(id) {
        print_json(&event)?;
    }
    Ok(())
}
