use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use microhabits_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "microhabits", version, about = "MicroHabits CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Personal habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Community groups and shared habits
    Group {
        #[command(subcommand)]
        action: commands::group::GroupAction,
    },
    /// Streaks, badges and progress
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Guided break exercises
    Break {
        #[command(subcommand)]
        action: commands::breaks::BreakAction,
    },
    /// User profile and premium plans
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging() {
    let loaded = Config::load();
    let level = match &loaded {
        Ok(config) => config.log.level.clone(),
        Err(_) => Config::default().log.level,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = loaded {
        tracing::warn!(error = %e, "config unreadable, using defaults");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Group { action } => commands::group::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Break { action } => commands::breaks::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "microhabits", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
