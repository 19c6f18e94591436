//! Sports walking workout.

use super::{Training, TrainingData, floor_div};
use crate::errors::{Result, WorkoutError};
use crate::models::WorkoutKind;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking: steps of 0.65 m, calories also depend on height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let data = TrainingData::new(action, duration, weight)?;
        if !(height.is_finite() && height > 0.0) {
            return Err(WorkoutError::NonPositiveField {
                field: "height",
                value: height,
            });
        }
        Ok(Self { data, height })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        // Floored, not true, division of speed² by height
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (CALORIES_WEIGHT_MULTIPLIER * self.data.weight
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.data.weight)
            * self.data.duration_min()
    }
}
