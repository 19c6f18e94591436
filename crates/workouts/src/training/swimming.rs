//! Swimming workout.

use super::{M_IN_KM, Training, TrainingData};
use crate::errors::Result;
use crate::models::WorkoutKind;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming: strokes of 1.38 m for distance, while mean speed comes from
/// the pool length and lap count.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Meters.
    pool_length: f64,
    lap_count: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        lap_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            pool_length,
            lap_count,
        })
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * f64::from(self.lap_count) / M_IN_KM / self.data.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.data.weight
    }
}
