use chrono::Utc;
use clap::Subcommand;
use microhabits_core::profile::checkout;
use microhabits_core::{ProfileSummary, StreakCalculator, UserProfile, PREMIUM_PLANS};
use serde::Serialize;

use super::{open_store, print_json, CliResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile with its statistics
    Show,
    /// Change name and/or avatar
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// List premium plans
    Plans,
    /// Mock checkout of a premium plan (nothing is charged)
    Subscribe { plan_id: String },
}

#[derive(Serialize)]
struct ProfileView<'a> {
    profile: &'a UserProfile,
    stats: ProfileSummary,
}

pub fn run(action: ProfileAction) -> CliResult {
    match action {
        ProfileAction::Show => {
            let store = open_store()?;
            print_json(&ProfileView {
                profile: store.profile(),
                stats: ProfileSummary::compute(store.habits(), store.groups(), StreakCalculator::new()),
            })?;
        }
        ProfileAction::Set { name, avatar } => {
            if name.is_none() && avatar.is_none() {
                return Err("nothing to change: pass --name and/or --avatar".into());
            }
            let mut store = open_store()?;
            let event = store.update_profile(name.as_deref(), avatar.as_deref())?;
            print_json(&event)?;
        }
        ProfileAction::Plans => print_json(&PREMIUM_PLANS)?,
        ProfileAction::Subscribe { plan_id } => {
            let receipt = checkout(&plan_id, Utc::now())?;
            print_json(&receipt)?;
        }
    }
    Ok(())
}
