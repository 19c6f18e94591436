//! Runtime settings for the batch driver.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};

pub const ON_ERROR_VAR: &str = "WORKOUTS_ON_ERROR";
pub const FORMAT_VAR: &str = "WORKOUTS_FORMAT";

/// What the driver does when a package cannot be turned into a workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the batch at the first failing package.
    #[default]
    Abort,
    /// Log the failure and move on to the next package.
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(WorkoutError::InvalidSetting {
                name: ON_ERROR_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// How each summary is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The fixed human-readable line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(WorkoutError::InvalidSetting {
                name: FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub on_error: ErrorPolicy,
    pub format: OutputFormat,
}

impl Settings {
    /// Reads settings from the process environment. Unset variables keep
    /// their defaults; unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(value) = lookup(ON_ERROR_VAR) {
            settings.on_error = value.parse()?;
        }
        if let Some(value) = lookup(FORMAT_VAR) {
            settings.format = value.parse()?;
        }
        Ok(settings)
    }
}
