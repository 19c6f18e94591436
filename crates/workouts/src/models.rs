use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// The workout types a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Sensor package code, e.g. `"RUN"`.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Display name used in the summary line.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of numeric fields a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Distance covered by one action, in meters.
    pub fn step_length(self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking => 0.65,
            WorkoutKind::Swimming => 1.38,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkout(code.to_string()))
    }
}

/// Summary of one completed workout.
///
/// A snapshot: built by [`crate::training::Training::summary`] and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Raw sensor package: a workout code and its numeric fields in
/// constructor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}
