//! Workout calculations.
//!
//! Every workout shares a [`TrainingData`] record (action count, duration,
//! weight) and the distance and speed formulas built on it. Calorie
//! estimation is specific to each workout and is what implementors of
//! [`Training`] must provide.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::errors::{Result, WorkoutError};
use crate::models::{InfoMessage, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Sensor readings common to all workouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes.
    pub action: u32,
    /// Hours, always positive.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingData {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(WorkoutError::NonPositiveDuration(duration));
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub fn duration_min(&self) -> f64 {
        self.duration * MIN_IN_HOUR
    }
}

/// Distance in kilometers covered by `action` steps of `step_length` meters.
pub fn distance(action: u32, step_length: f64) -> f64 {
    f64::from(action) * step_length / M_IN_KM
}

/// Mean speed in km/h. `duration` must be positive.
pub fn mean_speed(distance_km: f64, duration: f64) -> f64 {
    distance_km / duration
}

/// Floored division with the rounding behaviour of Python's float `//`.
///
/// The quotient is derived from the `fmod` remainder rather than from
/// `x / y`, so results near a whole number do not drift across it.
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        // Keep the sign of the true quotient on zero
        return 0.0_f64.copysign(x / y);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}

/// A workout that can report its statistics.
///
/// Implementors supply the shared record, their kind and a calorie formula;
/// distance, speed and the summary are derived from those. Override
/// [`Training::mean_speed`] when speed is not measured through step count.
pub trait Training {
    fn data(&self) -> &TrainingData;

    fn kind(&self) -> WorkoutKind;

    /// Kilocalories burned during the workout.
    fn spent_calories(&self) -> f64;

    /// Kilometers covered.
    fn distance(&self) -> f64 {
        distance(self.data().action, self.kind().step_length())
    }

    /// Kilometers per hour.
    fn mean_speed(&self) -> f64 {
        mean_speed(self.distance(), self.data().duration)
    }

    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.data().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A workout of any supported kind, as produced by
/// [`crate::package::read_package`].
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn data(&self) -> &TrainingData {
        self.as_training().data()
    }

    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
