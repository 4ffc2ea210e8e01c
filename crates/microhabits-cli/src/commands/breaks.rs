use clap::Subcommand;
use microhabits_core::break_session::{find_exercise, format_countdown, BreakController, BreakSessionEngine, EXERCISES};
use microhabits_core::{Config, Event};
use tracing::debug;

use super::{cue_dispatcher, print_json, CliResult};

#[derive(Subcommand)]
pub enum BreakAction {
    /// List guided exercises
    List,
    /// Show one exercise with its instructions
    Show { id: String },
    /// Run an exercise in the terminal until it completes
    Run {
        id: String,
        /// Silence audio cues for this run
        #[arg(long)]
        mute: bool,
        /// Print every event as a JSON line instead of a countdown
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BreakAction) -> CliResult {
    match action {
        BreakAction::List => print_json(&EXERCISES)?,
        BreakAction::Show { id } => {
            let exercise = find_exercise(&id).ok_or_else(|| format!("exercise not found: {id}"))?;
            print_json(exercise)?;
        }
        BreakAction::Run { id, mute, json } => {
            let exercise = find_exercise(&id).ok_or_else(|| format!("exercise not found: {id}"))?;
            let cues = cue_dispatcher(&Config::load_or_default(), mute);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let mut controller = BreakController::with_cues(BreakSessionEngine::new(), cues);
            let state = runtime.block_on(controller.run(&id, |event| {
                if json {
                    if let Ok(line) = serde_json::to_string(event) {
                        println!("{line}");
                    }
                    return;
                }
                match event {
                    Event::SessionStarted { .. } => {
                        println!("{} ({} min)", exercise.name, exercise.duration_min());
                        if let Some(first) = exercise.instructions.first() {
                            println!("  1. {first}");
                        }
                    }
                    Event::SessionTicked {
                        remaining_secs,
                        step_index,
                        step_changed,
                        ..
                    } => {
                        if *step_changed {
                            if let Some(step) = exercise.instructions.get(*step_index) {
                                println!("  {}. {step}", step_index + 1);
                            }
                        }
                        if remaining_secs % 30 == 0 {
                            println!("  {}", format_countdown(*remaining_secs));
                        }
                    }
                    Event::SessionCompleted { .. } => println!("¡Completado!"),
                    _ => {}
                }
            }));
            debug!(?state, "break session finished");
        }
    }
    Ok(())
}
