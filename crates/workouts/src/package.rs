//! Turns raw sensor packages into workouts.

use tracing::debug;

use crate::errors::{Result, WorkoutError};
use crate::models::{Package, WorkoutKind};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Builds the workout described by `code` and its numeric fields.
///
/// Fields are positional, in the order the workout's constructor takes them:
///
/// | code  | fields                                             |
/// |-------|----------------------------------------------------|
/// | `RUN` | action, duration, weight                           |
/// | `WLK` | action, duration, weight, height                   |
/// | `SWM` | action, duration, weight, pool_length, lap_count   |
///
/// The code is checked before the field count, and either a complete
/// workout is returned or nothing is.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = whole(data[0], "action")?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight)?.into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutKind::Swimming => {
            let lap_count = whole(data[4], "lap_count")?;
            Swimming::new(action, duration, weight, data[3], lap_count)?.into()
        }
    };

    debug!(%kind, ?data, "Read workout package");
    Ok(workout)
}

impl TryFrom<&Package> for Workout {
    type Error = WorkoutError;

    fn try_from(package: &Package) -> Result<Self> {
        read_package(&package.code, &package.data)
    }
}

fn whole(value: f64, field: &'static str) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}
