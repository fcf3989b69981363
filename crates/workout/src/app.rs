//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use workout_cli::output::{format_outcomes, write_to_file};
use workout_cli::presenter::{CLIResultPresenter, ResultPresenter};
use workout_core::batch::{execute_packages, first_error};
use workout_core::constants::exit_codes;

use crate::config::AppConfig;
use crate::errors::handle_error;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        workout_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter = CLIResultPresenter::new(config.format);
    if config.list {
        presenter.present_disciplines();
        return Ok(exit_codes::SUCCESS);
    }

    let packages = match config.packages() {
        Ok(packages) => packages,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(handle_error(&e));
        }
    };

    info!(count = packages.len(), "processing packages");
    let outcomes = execute_packages(&packages, config.fail_fast);

    for outcome in &outcomes {
        match &outcome.outcome {
            Ok(result) => presenter.present_result(result)?,
            Err(e) => presenter.present_error(&outcome.package, e),
        }
    }

    if let Some(ref path) = config.output {
        let lines = format_outcomes(&outcomes, config.format)?;
        write_to_file(path, &lines)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(first_error(&outcomes).map_or(exit_codes::SUCCESS, handle_error))
}
