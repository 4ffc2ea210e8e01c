use clap::Subcommand;
use microhabits_core::stats::{evaluate_badges, DailyProgress, StreakReport};
use microhabits_core::{CategoryFilter, ProfileSummary, StreakCalculator};
use serde::Serialize;

use super::{open_store, parse_day, print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak of every habit
    Streaks {
        /// Day to compute streaks for (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Achievement badges
    Badges,
    /// Today's progress and overall totals
    Summary {
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
}

#[derive(Serialize)]
struct Summary {
    progress: DailyProgress,
    totals: ProfileSummary,
}

pub fn run(action: StatsAction) -> CliResult {
    let store = open_store()?;

    match action {
        StatsAction::Streaks { date } => {
            let calc = StreakCalculator::as_of(parse_day(date.as_deref())?);
            print_json(&StreakReport::compute(store.habits(), calc))?;
        }
        StatsAction::Badges => {
            let calc = StreakCalculator::new();
            let badges = evaluate_badges(
                calc.total_completions(store.habits()),
                calc.longest_streak(store.habits()),
            );
            print_json(&badges)?;
        }
        StatsAction::Summary { category } => {
            let calc = StreakCalculator::new();
            print_json(&Summary {
                progress: DailyProgress::compute(store.habits(), category, calc.day()),
                totals: ProfileSummary::compute(store.habits(), store.groups(), calc),
            })?;
        }
    }
    Ok(())
}
