//! Consecutive-day streak computation.
//!
//! The *current* streak is the run of completed days ending exactly on the
//! reference day. A habit not yet completed today has a current streak of 0,
//! even when yesterday was completed. The *best run* is the longest run
//! anywhere in the history and is what the profile shows.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use crate::habit::Habit;

/// Count consecutive completed days walking back from `as_of`.
///
/// Stops at the first missing day. Dates after `as_of` are ignored.
pub fn compute_streak(dates: &BTreeSet<NaiveDate>, as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = as_of;
    while dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive days anywhere in `dates`.
pub fn compute_best_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &day in dates {
        run = match prev.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Sum of completion-set sizes across all habits.
pub fn compute_total_completions(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.completion_count() as u32).sum()
}

/// Highest current streak across habits; 0 for an empty list.
pub fn compute_longest_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|h| compute_streak(&h.completed_dates, as_of))
        .fold(0, u32::max)
}

/// Streak statistics anchored to a reference day.
///
/// Everything is recomputed from the habits passed in; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct StreakCalculator {
    as_of: NaiveDate,
}

impl StreakCalculator {
    /// Calculator anchored to the local calendar day.
    pub fn new() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    pub fn as_of(day: NaiveDate) -> Self {
        Self { as_of: day }
    }

    pub fn day(&self) -> NaiveDate {
        self.as_of
    }

    pub fn streak(&self, habit: &Habit) -> u32 {
        compute_streak(&habit.completed_dates, self.as_of)
    }

    pub fn best_run(&self, habit: &Habit) -> u32 {
        compute_best_run(&habit.completed_dates)
    }

    pub fn total_completions(&self, habits: &[Habit]) -> u32 {
        compute_total_completions(habits)
    }

    pub fn longest_streak(&self, habits: &[Habit]) -> u32 {
        compute_longest_streak(habits, self.as_of)
    }

    /// Best historical run across habits; 0 for an empty list.
    pub fn longest_best_run(&self, habits: &[Habit]) -> u32 {
        habits.iter().map(|h| self.best_run(h)).fold(0, u32::max)
    }

    /// Habits whose current streak is non-zero.
    pub fn active_habits(&self, habits: &[Habit]) -> usize {
        habits.iter().filter(|h| self.streak(h) > 0).count()
    }
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}
