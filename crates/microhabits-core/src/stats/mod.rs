//! Derived statistics for habits.
//!
//! All values are pure functions over the current habit snapshot and are
//! recomputed on every read.

mod badges;
mod streak;
mod summary;

pub use badges::{evaluate_badges, Badge, BadgeStatus, BadgeThreshold, BADGES};
pub use streak::{
    compute_best_run, compute_longest_streak, compute_streak, compute_total_completions,
    StreakCalculator,
};
pub use summary::{success_rate, DailyProgress, HabitStreak, ProfileSummary, StreakReport};
