//! CLI result presenter.

use workout_core::calculator::WorkoutError;
use workout_core::package::Package;
use workout_core::summary::WorkoutResult;

use crate::output::{format_disciplines, format_error, format_result, OutputError, OutputFormat};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a computed workout.
    fn present_result(&self, result: &WorkoutResult) -> Result<(), OutputError>;

    /// Present a rejected package.
    fn present_error(&self, package: &Package, error: &WorkoutError);

    /// Present the list of known disciplines.
    fn present_disciplines(&self);
}

/// Presenter that prints results to stdout and errors to stderr.
pub struct CLIResultPresenter {
    format: OutputFormat,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &WorkoutResult) -> Result<(), OutputError> {
        println!("{}", format_result(result, self.format)?);
        Ok(())
    }

    fn present_error(&self, package: &Package, error: &WorkoutError) {
        eprintln!("Error: {}", format_error(package, error));
    }

    fn present_disciplines(&self) {
        print!("{}", format_disciplines());
    }
}
