//! # workout-cli
//!
//! CLI output, result presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::{OutputError, OutputFormat};
pub use presenter::{CLIResultPresenter, ResultPresenter};
