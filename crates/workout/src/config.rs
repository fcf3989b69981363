//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use workout_cli::OutputFormat;
use workout_core::calculator::WorkoutError;
use workout_core::package::{default_packages, Package};

/// Workout summary calculator for running, walking, and swimming sessions.
#[derive(Parser, Debug)]
#[command(name = "workout", version, about)]
pub struct AppConfig {
    /// Sensor package as CODE:V1,V2,... (repeatable). Defaults to the built-in sample.
    #[arg(short, long = "package", value_name = "CODE:VALUES", allow_hyphen_values = true)]
    pub packages: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text", env = "WORKOUT_FORMAT")]
    pub format: OutputFormat,

    /// Also write rendered lines to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop at the first rejected package.
    #[arg(long)]
    pub fail_fast: bool,

    /// List known disciplines and exit.
    #[arg(long)]
    pub list: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Packages to process: the parsed `--package` values, or the built-in
    /// sample when none were given.
    pub fn packages(&self) -> Result<Vec<Package>, WorkoutError> {
        if self.packages.is_empty() {
            return Ok(default_packages());
        }
        self.packages.iter().map(|p| p.parse::<Package>()).collect()
    }
}
