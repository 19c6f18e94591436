//! Fitness tracker statistics.
//!
//! Turns raw sensor packages into running, sports walking and swimming
//! workouts, and reports distance, mean speed and calories burned for each.
//!
//! ```rust
//! use workouts::{read_package, Training};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.summary());
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod batch;
pub mod config;
pub mod errors;
pub mod models;
pub mod package;
pub mod training;

pub use batch::{BatchReport, default_packages, process_batch, show};
pub use config::{ErrorPolicy, OutputFormat, Settings};
pub use errors::{Result, WorkoutError};
pub use models::{InfoMessage, Package, WorkoutKind};
pub use package::read_package;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingData, Workout};
