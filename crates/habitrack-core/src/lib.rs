//! # habitrack Core Library
//!
//! This library provides the core logic for habitrack, a tracker for daily
//! and weekly habits. All operations are available through the standalone
//! `habitrack` CLI, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Analysis**: pure functions deciding whether a habit is done for the
//!   current period and computing its current and longest streak. They take
//!   the completion history and the reference date as arguments and never
//!   read the clock or storage themselves.
//! - **Storage**: SQLite-based habit/completion storage and TOML-based
//!   configuration, exposed to the analysis callers through the narrow
//!   [`HabitRepository`] trait.
//! - **Reports**: per-habit rows and the sorted overview table.
//!
//! ## Key Components
//!
//! - [`evaluate`] / [`streaks`]: completion status and streak analysis
//! - [`period_distance`]: day/ISO-week distance shared by both
//! - [`HabitDb`]: habit and completion persistence
//! - [`Config`]: application configuration management

pub mod analysis;
pub mod error;
pub mod habit;
pub mod report;
pub mod storage;

pub use analysis::{evaluate, period_distance, streaks};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use habit::{Cadence, CadenceFilter, CompletionStatus, Habit, StreakResult};
pub use report::{HabitReport, SortColumn};
pub use storage::{Config, HabitDb, HabitRepository};
