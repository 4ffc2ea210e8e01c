pub mod breaks;
pub mod config;
pub mod group;
pub mod habit;
pub mod profile;
pub mod stats;

use std::io::Write;

use chrono::{Local, NaiveDate};
use microhabits_core::{AppStore, AudioCue, Config, CoreError, CueDispatcher, CuePlayer, Database, Event};
use serde::Serialize;
use tracing::debug;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn open_store() -> Result<AppStore<Database>, CoreError> {
    Ok(AppStore::load(Database::open()?))
}

/// Parse `--date YYYY-MM-DD`, defaulting to the local calendar day.
pub fn parse_day(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}"))?),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Rings the terminal bell once per note of a cue.
pub struct BellPlayer;

impl CuePlayer for BellPlayer {
    fn play(&self, cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        debug!(cue = cue.name(), "playing cue");
        let mut err = std::io::stderr();
        for _ in cue.notes() {
            err.write_all(b"\x07")?;
        }
        err.flush()?;
        Ok(())
    }
}

/// Bell-backed dispatcher using the `sound.*` settings. `mute` forces silence.
pub fn cue_dispatcher(config: &Config, mute: bool) -> CueDispatcher {
    CueDispatcher::new(Box::new(BellPlayer), mute || config.sound.muted).with_volume(config.sound.volume)
}

/// Play the cue for `event`, if any, with the saved sound settings.
pub fn play_cue(event: &Event) {
    let dispatcher = cue_dispatcher(&Config::load_or_default(), false);
    if let Some(cue) = dispatcher.dispatch(event) {
        debug!(cue = cue.name(), volume = dispatcher.volume(), "cue dispatched");
    }
}
