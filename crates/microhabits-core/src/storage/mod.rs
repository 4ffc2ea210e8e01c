mod config;
pub mod database;

pub use config::{Config, LogConfig, SoundConfig};
pub use database::Database;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Document keys. Each holds one whole JSON document, overwritten on every
/// change.
pub const HABITS_KEY: &str = "habits";
pub const GROUPS_KEY: &str = "groups";
pub const PROFILE_KEY: &str = "user-profile";

/// Local key/value storage holding JSON text.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, json: &str) -> Result<(), StorageError>;
}

/// Load and decode the document under `key`.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.load(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode `value` and overwrite the document under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.save(key, &json)
}

/// Returns the data directory, creating it if needed.
///
/// `MICROHABITS_DATA_DIR` overrides the location. Otherwise it is
/// `~/.config/microhabits/`, or `~/.config/microhabits-dev/` when
/// `MICROHABITS_ENV=dev`.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("MICROHABITS_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("MICROHABITS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("microhabits-dev")
            } else {
                base_dir.join("microhabits")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
