use clap::Subcommand;
use microhabits_core::stats::DailyProgress;
use microhabits_core::{
    CategoryFilter, Frequency, Habit, HabitCategory, HabitDraft, StreakCalculator, DEFAULT_ICON, HABIT_ICONS,
};
use serde::Serialize;

use super::{open_store, parse_day, play_cue, print_json, CliResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with today's status
    List {
        /// Category filter ("all", "health", "study", ...)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Create a habit
    Add {
        name: String,
        #[arg(long, default_value = "wellbeing")]
        category: HabitCategory,
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
        #[arg(long)]
        icon: Option<String>,
        /// Reminder time as HH:MM
        #[arg(long)]
        reminder: Option<String>,
    },
    /// Edit a habit; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<HabitCategory>,
        #[arg(long)]
        frequency: Option<Frequency>,
        #[arg(long)]
        icon: Option<String>,
        /// Reminder time as HH:MM; an empty value clears it
        #[arg(long)]
        reminder: Option<String>,
    },
    /// Delete a habit
    Delete { id: String },
    /// Mark or unmark a habit as done
    Toggle {
        id: String,
        /// Day to toggle (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List the icons offered for habits
    Icons,
}

/// Camel case, like the flattened habit fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitRow<'a> {
    #[serde(flatten)]
    habit: &'a Habit,
    category_label: &'static str,
    category_icon: &'static str,
    completed_today: bool,
    streak: u32,
}

#[derive(Serialize)]
struct IconList {
    icons: &'static [&'static str],
    default: &'static str,
}

#[derive(Serialize)]
struct HabitList<'a> {
    progress: DailyProgress,
    habits: Vec<HabitRow<'a>>,
}

fn draft_from(habit: &Habit) -> HabitDraft {
    HabitDraft {
        name: habit.name.clone(),
        category: habit.category,
        frequency: habit.frequency,
        icon: habit.icon.clone(),
        reminder_time: habit.reminder_time.map(|r| r.to_string()),
    }
}

pub fn run(action: HabitAction) -> CliResult {
    let mut store = open_store()?;

    match action {
        HabitAction::List { category } => {
            let calc = StreakCalculator::new();
            let today = calc.day();
            let habits = store
                .habits()
                .iter()
                .filter(|h| category.matches(h.category))
                .map(|habit| HabitRow {
                    habit,
                    category_label: habit.category.label(),
                    category_icon: habit.category.icon(),
                    completed_today: habit.is_completed_on(today),
                    streak: calc.streak(habit),
                })
                .collect();
            print_json(&HabitList {
                progress: DailyProgress::compute(store.habits(), category, today),
                habits,
            })?;
        }
        HabitAction::Add {
            name,
            category,
            frequency,
            icon,
            reminder,
        } => {
            let mut draft = HabitDraft::new(name);
            draft.category = category;
            draft.frequency = frequency;
            if let Some(icon) = icon {
                draft.icon = icon;
            }
            draft.reminder_time = reminder;
            let event = store.add_habit(&draft)?;
            print_json(&event)?;
        }
        HabitAction::Edit {
            id,
            name,
            category,
            frequency,
            icon,
            reminder,
        } => {
            let habit = store.habit(&id).ok_or_else(|| format!("habit not found: {id}"))?;
            let mut draft = draft_from(habit);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(frequency) = frequency {
                draft.frequency = frequency;
            }
            if let Some(icon) = icon {
                draft.icon = icon;
            }
            if reminder.is_some() {
                draft.reminder_time = reminder;
            }
            if let Some(event) = store.update_habit(&id, &draft)? {
                print_json(&event)?;
            }
        }
        HabitAction::Delete { id } => {
            let event = store
                .delete_habit(&id)
                .ok_or_else(|| format!("habit not found: {id}"))?;
            print_json(&event)?;
        }
        HabitAction::Toggle { id, date } => {
            let day = parse_day(date.as_deref())?;
            let event = store
                .toggle_habit_completion(&id, day)
                .ok_or_else(|| format!("habit not found: {id}"))?;
            play_cue(&event);
            print_json(&event)?;
        }
        HabitAction::Icons => print_json(&IconList {
            icons: &HABIT_ICONS,
            default: DEFAULT_ICON,
        })?,
    }
    Ok(())
}
