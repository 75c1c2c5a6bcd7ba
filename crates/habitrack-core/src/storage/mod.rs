mod config;
pub mod database;
pub mod migrations;

pub use config::{CompletionConfig, Config, OverviewConfig};
pub use database::HabitDb;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{ConfigError, Result};
use crate::habit::Cadence;

/// Narrow read interface the analysis callers depend on.
///
/// Implementors return snapshots: the history is fully materialized and
/// ascending (ISO-week order) before it reaches the analysis functions.
pub trait HabitRepository {
    /// Cadence of a habit. An unparseable stored cadence is an error, never a default.
    fn cadence(&self, habit: &str) -> Result<Cadence>;

    /// Ascending completion dates of a habit.
    fn history(&self, habit: &str) -> Result<Vec<NaiveDate>>;
}

/// Returns the habitrack data directory, creating it if needed.
///
/// `HABITRACK_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/habitrack[-dev]/`, with `HABITRACK_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABITRACK_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitrack-dev")
            } else {
                base_dir.join("habitrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
