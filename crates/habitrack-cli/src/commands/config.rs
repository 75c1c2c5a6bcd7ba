//! Configuration commands for CLI.

use clap::Subcommand;
use habitrack_core::{Config, ConfigError};

/// Every settable key, in display order.
const KEYS: [&str; 4] = [
    "overview.default_sort",
    "overview.default_cadence",
    "completion.recent_limit",
    "completion.available_window_days",
];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dotted key, e.g. completion.recent_limit
        key: String,
    },
    /// Change one setting and save it
    Set {
        /// Dotted key, e.g. overview.default_sort
        key: String,
        /// New value
        value: String,
    },
    /// Print every setting as `key = value`
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the location of the config file
    Path,
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for key in KEYS {
                    if let Some(value) = config.get(key) {
                        println!("{key} = {value}");
                    }
                }
            }
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Settings restored to defaults.");
        }
    }
    Ok(())
}
