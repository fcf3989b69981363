//! Discipline dispatcher: sensor code plus positional values to `Training`.

use tracing::debug;

use crate::calculator::{require_count, Training, WorkoutError};
use crate::discipline::Discipline;
use crate::package::Package;

/// Build a validated `Training` from a discipline code and its raw values.
///
/// Values are positional: action count, duration, weight, then height for
/// `WLK` or pool length and pool laps for `SWM`.
pub fn read_package(code: &str, values: &[f64]) -> Result<Training, WorkoutError> {
    let discipline = Discipline::from_code(code)?;
    if values.len() != discipline.arity() {
        return Err(WorkoutError::ArgumentCount {
            discipline,
            expected: discipline.arity(),
            actual: values.len(),
        });
    }

    let action_count = require_count("action_count", values[0])?;
    let (duration, weight) = (values[1], values[2]);
    let training = match discipline {
        Discipline::Running => Training::running(action_count, duration, weight)?,
        Discipline::SportsWalking => {
            Training::sports_walking(action_count, duration, weight, values[3])?
        }
        Discipline::Swimming => Training::swimming(
            action_count,
            duration,
            weight,
            require_count("pool_length_m", values[3])?,
            require_count("pool_laps", values[4])?,
        )?,
    };

    debug!(code, discipline = %discipline, "package dispatched");
    Ok(training)
}

/// Dispatch a parsed package.
pub fn read(package: &Package) -> Result<Training, WorkoutError> {
    read_package(&package.code, &package.values)
}

/// Codes the dispatcher accepts.
#[must_use]
pub fn available() -> Vec<&'static str> {
    Discipline::ALL.iter().map(|d| d.code()).collect()
}
