//! Dashboard and profile summaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badges::{evaluate_badges, BadgeStatus};
use super::streak::StreakCalculator;
use crate::group::Group;
use crate::habit::{CategoryFilter, Frequency, Habit};

/// Today's completion progress, optionally restricted to one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub completed_today: usize,
    pub total_habits: usize,
    /// 0.0 .. 100.0, 0 when there are no habits.
    pub percentage: f64,
}

impl DailyProgress {
    pub fn compute(habits: &[Habit], filter: CategoryFilter, day: NaiveDate) -> Self {
        let filtered: Vec<&Habit> = habits.iter().filter(|h| filter.matches(h.category)).collect();
        let completed_today = filtered.iter().filter(|h| h.is_completed_on(day)).count();
        let total_habits = filtered.len();
        let percentage = if total_habits > 0 {
            completed_today as f64 / total_habits as f64 * 100.0
        } else {
            0.0
        };
        Self {
            completed_today,
            total_habits,
            percentage,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total_habits - self.completed_today
    }

    pub fn all_done(&self) -> bool {
        self.total_habits > 0 && self.completed_today == self.total_habits
    }
}

/// Completions as a share of the check-ins each habit has had the chance
/// to record since it was created: one per day for daily habits, one per
/// started week for weekly habits. Capped at 100.
pub fn success_rate(habits: &[Habit], day: NaiveDate) -> f64 {
    let mut opportunities: u64 = 0;
    let mut completions: u64 = 0;
    for habit in habits {
        let created = habit.created_at.date_naive();
        let days = (day - created).num_days().max(0) as u64 + 1;
        opportunities += match habit.frequency {
            Frequency::Daily => days,
            Frequency::Weekly => days.div_ceil(7),
        };
        completions += habit
            .completed_dates
            .iter()
            .filter(|d| **d <= day)
            .count() as u64;
    }
    if opportunities == 0 {
        return 0.0;
    }
    (completions as f64 / opportunities as f64 * 100.0).min(100.0)
}

/// Current streak of one habit, as listed by the streak view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStreak {
    pub habit_id: String,
    pub name: String,
    pub icon: String,
    pub streak: u32,
    pub best_run: u32,
    pub total_completions: u32,
}

/// Everything the streak view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakReport {
    pub day: NaiveDate,
    pub total_completions: u32,
    pub longest_streak: u32,
    pub active_habits: usize,
    pub habits: Vec<HabitStreak>,
    pub badges: Vec<BadgeStatus>,
}

impl StreakReport {
    pub fn compute(habits: &[Habit], calc: StreakCalculator) -> Self {
        let total_completions = calc.total_completions(habits);
        let longest_streak = calc.longest_streak(habits);
        Self {
            day: calc.day(),
            total_completions,
            longest_streak,
            active_habits: calc.active_habits(habits),
            habits: habits
                .iter()
                .map(|h| HabitStreak {
                    habit_id: h.id.clone(),
                    name: h.name.clone(),
                    icon: h.icon.clone(),
                    streak: calc.streak(h),
                    best_run: calc.best_run(h),
                    total_completions: h.completion_count() as u32,
                })
                .collect(),
            badges: evaluate_badges(total_completions, longest_streak),
        }
    }
}

/// Profile statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub total_habits: usize,
    pub completed_today: usize,
    pub total_completions: u32,
    pub joined_groups: usize,
    /// Best historical run across all habits.
    pub best_streak: u32,
    pub success_rate: f64,
}

impl ProfileSummary {
    pub fn compute(habits: &[Habit], groups: &[Group], calc: StreakCalculator) -> Self {
        let day = calc.day();
        Self {
            total_habits: habits.len(),
            completed_today: habits.iter().filter(|h| h.is_completed_on(day)).count(),
            total_completions: calc.total_completions(habits),
            joined_groups: groups.iter().filter(|g| g.is_joined).count(),
            best_streak: calc.longest_best_run(habits),
            success_rate: success_rate(habits, day),
        }
    }
}
