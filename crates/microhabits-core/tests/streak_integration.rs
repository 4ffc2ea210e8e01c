//! Integration tests for streak, badge and summary statistics.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use microhabits_core::stats::{
    compute_longest_streak, compute_streak, evaluate_badges, DailyProgress, StreakReport,
};
use microhabits_core::{CategoryFilter, Habit, HabitCategory, HabitDraft, StreakCalculator};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn days_ago(offsets: &[i64]) -> BTreeSet<NaiveDate> {
    offsets.iter().map(|d| today() - Duration::days(*d)).collect()
}

fn habit_with(name: &str, category: HabitCategory, offsets: &[i64]) -> Habit {
    let mut draft = HabitDraft::new(name);
    draft.category = category;
    let mut habit = Habit::create(&draft).unwrap();
    habit.completed_dates = days_ago(offsets);
    habit
}

#[test]
fn test_three_day_streak_breaks_on_gap() {
    let mut habit = habit_with("Meditar", HabitCategory::Wellbeing, &[0, 1, 2]);
    let calc = StreakCalculator::as_of(today());
    assert_eq!(calc.streak(&habit), 3);

    habit.toggle_completion(today() - Duration::days(1));
    assert_eq!(calc.streak(&habit), 1);
    assert_eq!(calc.best_run(&habit), 1);
}

#[test]
fn test_streak_ignores_future_completions() {
    let mut dates = days_ago(&[0, 1]);
    dates.insert(today() + Duration::days(1));
    assert_eq!(compute_streak(&dates, today()), 2);
}

#[test]
fn test_longest_streak_across_habits() {
    let habits = vec![
        habit_with("Meditar", HabitCategory::Wellbeing, &[0, 1, 2]),
        habit_with("Leer", HabitCategory::Study, &[0]),
        habit_with("Correr", HabitCategory::Health, &[1, 2, 3, 4]),
    ];
    assert_eq!(compute_longest_streak(&habits, today()), 3);
    assert_eq!(compute_longest_streak(&[], today()), 0);

    let calc = StreakCalculator::as_of(today());
    assert_eq!(calc.total_completions(&habits), 8);
    assert_eq!(calc.longest_best_run(&habits), 4);
    assert_eq!(calc.active_habits(&habits), 2);
}

#[test]
fn test_streak_report_totals() {
    let habits = vec![
        habit_with("Leer", HabitCategory::Study, &[0]),
        habit_with("Meditar", HabitCategory::Wellbeing, &[0, 1, 2]),
    ];
    let report = StreakReport::compute(&habits, StreakCalculator::as_of(today()));
    assert_eq!(report.habits.len(), 2);
    assert_eq!(report.longest_streak, 3);
    assert_eq!(report.total_completions, 4);
}

#[test]
fn test_badges_follow_streaks_and_totals() {
    let habits = vec![habit_with("Meditar", HabitCategory::Wellbeing, &[0, 1, 2])];
    let calc = StreakCalculator::as_of(today());
    let badges = evaluate_badges(calc.total_completions(&habits), calc.longest_streak(&habits));
    let unlocked: Vec<_> = badges
        .iter()
        .filter(|b| b.unlocked)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(unlocked, vec!["Principiante", "Constante"]);
}

#[test]
fn test_daily_progress_respects_filter() {
    let habits = vec![
        habit_with("Meditar", HabitCategory::Wellbeing, &[0]),
        habit_with("Leer", HabitCategory::Study, &[1]),
    ];
    let all = DailyProgress::compute(&habits, CategoryFilter::All, today());
    assert_eq!(all.completed_today, 1);
    assert_eq!(all.total_habits, 2);
    assert_eq!(all.percentage, 50.0);

    let study = DailyProgress::compute(&habits, CategoryFilter::Only(HabitCategory::Study), today());
    assert_eq!(study.completed_today, 0);
    assert_eq!(study.remaining(), 1);
}

proptest! {
    #[test]
    fn prop_today_completed_gives_positive_streak(offsets in prop::collection::btree_set(1i64..60, 0..30)) {
        let mut dates = days_ago(&offsets.into_iter().collect::<Vec<_>>());
        dates.insert(today());
        prop_assert!(compute_streak(&dates, today()) >= 1);
    }

    #[test]
    fn prop_today_missing_gives_zero(offsets in prop::collection::btree_set(1i64..60, 0..30)) {
        let dates = days_ago(&offsets.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(compute_streak(&dates, today()), 0);
    }

    #[test]
    fn prop_streak_never_exceeds_completions(offsets in prop::collection::btree_set(0i64..60, 0..40)) {
        let dates = days_ago(&offsets.into_iter().collect::<Vec<_>>());
        prop_assert!(compute_streak(&dates, today()) as usize <= dates.len());
    }

    #[test]
    fn prop_toggle_twice_restores_set(
        offsets in prop::collection::btree_set(0i64..60, 0..30),
        day in 0i64..60,
    ) {
        let mut habit = habit_with("Leer", HabitCategory::Study, &offsets.into_iter().collect::<Vec<_>>());
        let before = habit.completed_dates.clone();
        let target = today() - Duration::days(day);
        let first = habit.toggle_completion(target);
        let second = habit.toggle_completion(target);
        prop_assert_ne!(first, second);
        prop_assert_eq!(habit.completed_dates, before);
    }
}
