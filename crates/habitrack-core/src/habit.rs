//! Habit domain types.
//!
//! A habit has a fixed [`Cadence`] and a history of completion dates. The
//! analysis results ([`CompletionStatus`], [`StreakResult`]) live here too so
//! storage, reports and the CLI share one vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Date format used for storage and the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Recurrence unit of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
}

impl Cadence {
    /// Get string representation for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            other => Err(ValidationError::UnrecognizedCadence(other.to_string())),
        }
    }
}

/// Which habits a listing or overview should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadenceFilter {
    #[default]
    All,
    Daily,
    Weekly,
}

impl CadenceFilter {
    /// The single cadence selected, or `None` for [`CadenceFilter::All`].
    pub fn cadence(&self) -> Option<Cadence> {
        match self {
            CadenceFilter::All => None,
            CadenceFilter::Daily => Some(Cadence::Daily),
            CadenceFilter::Weekly => Some(Cadence::Weekly),
        }
    }
}

impl FromStr for CadenceFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CadenceFilter::All),
            "daily" => Ok(CadenceFilter::Daily),
            "weekly" => Ok(CadenceFilter::Weekly),
            other => Err(ValidationError::InvalidValue {
                field: "cadence".into(),
                message: format!("'{other}' is not one of all, daily, weekly"),
            }),
        }
    }
}

/// A registered habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub task_specification: String,
    pub cadence: Cadence,
    pub created_on: NaiveDate,
}

impl Habit {
    /// Build a habit, trimming the name and rejecting empty ones.
    pub fn new(
        name: impl Into<String>,
        task_specification: impl Into<String>,
        cadence: Cadence,
        created_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            task_specification: task_specification.into(),
            cadence,
            created_on,
        })
    }
}

/// Whether a habit counts as done for the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed,
    NotCompleted,
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionStatus::Completed => write!(f, "Yes"),
            CompletionStatus::NotCompleted => write!(f, "No"),
        }
    }
}

/// Current and longest run, counted in cadence periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

/// The host's local calendar date. Callers read this once and pass it down.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}
