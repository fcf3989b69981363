//! # workout-core
//!
//! Core library for the workout summary calculator.
//! Turns raw sensor packages for running, sports walking, and swimming into
//! distance, mean speed, and calorie statistics.

pub mod batch;
pub mod calculator;
pub mod constants;
pub mod discipline;
pub mod package;
pub mod registry;
pub mod summary;

// Re-exports
pub use batch::{execute_packages, PackageOutcome};
pub use calculator::{Training, WorkoutError, WorkoutInput};
pub use constants::exit_codes;
pub use discipline::Discipline;
pub use package::{default_packages, Package};
pub use registry::read_package;
pub use summary::WorkoutResult;

/// Dispatch a package and compute its statistics in one call.
///
/// # Example
/// ```
/// let result = workout_core::summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
/// assert!((result.calories - 336.0).abs() < 1e-9);
/// assert!(workout_core::summarize("BIK", &[1.0, 1.0, 1.0]).is_err());
/// ```
pub fn summarize(code: &str, values: &[f64]) -> Result<WorkoutResult, WorkoutError> {
    read_package(code, values).map(|training| training.summary())
}
