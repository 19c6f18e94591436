//! Running workout.

use super::{M_IN_KM, Training, TrainingData};
use crate::errors::Result;
use crate::models::WorkoutKind;

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running: steps of 0.65 m, calories from mean speed and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SHIFT) * self.data.weight
            / M_IN_KM
            * self.data.duration_min()
    }
}
