//! Workout: summary calculator for running, walking, and swimming sessions.

use workout_core::constants::exit_codes;
use workout_lib::{app, config};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR_GENERIC
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
