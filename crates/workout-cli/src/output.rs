//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use workout_core::batch::PackageOutcome;
use workout_core::calculator::WorkoutError;
use workout_core::discipline::Discipline;
use workout_core::package::Package;
use workout_core::summary::WorkoutResult;

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One summary sentence per workout.
    #[default]
    Text,
    /// One JSON object per workout.
    Json,
}

/// Error raised while rendering or writing output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    code: &'a str,
    #[serde(flatten)]
    result: &'a WorkoutResult,
}

/// Render a single result in the requested format.
pub fn format_result(result: &WorkoutResult, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(result.message()),
        OutputFormat::Json => {
            let record = JsonRecord {
                code: result.discipline.code(),
                result,
            };
            Ok(serde_json::to_string(&record)?)
        }
    }
}

/// Render a rejected package.
#[must_use]
pub fn format_error(package: &Package, error: &WorkoutError) -> String {
    format!("package {package}: {error}")
}

/// Render every successful outcome, skipping failures.
pub fn format_outcomes(
    outcomes: &[PackageOutcome],
    format: OutputFormat,
) -> Result<Vec<String>, OutputError> {
    outcomes
        .iter()
        .filter_map(|o| o.outcome.as_ref().ok())
        .map(|result| format_result(result, format))
        .collect()
}

/// Render the table of known disciplines.
#[must_use]
pub fn format_disciplines() -> String {
    let mut out = String::new();
    for discipline in Discipline::ALL {
        let _ = writeln!(
            out,
            "{:<5}{:<15}{} values: {}",
            discipline.code(),
            discipline.name(),
            discipline.arity(),
            discipline.fields().join(", ")
        );
    }
    out
}

/// Write rendered lines to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    debug!(path = %path.display(), lines = lines.len(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim() -> WorkoutResult {
        WorkoutResult::new(Discipline::Swimming, 1.0, 0.9936, 1.0, 336.0)
    }

    #[test]
    fn format_text() {
        let line = format_result(&swim(), OutputFormat::Text).unwrap();
        assert_eq!(
            line,
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn format_json() {
        let line = format_result(&swim(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["code"], "SWM");
        assert_eq!(value["discipline"], "Swimming");
        assert_eq!(value["mean_speed_kmh"], 1.0);
        assert_eq!(value["calories"], 336.0);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn format_error_names_package() {
        let package = Package::new("BIK", vec![1.0, 2.0]);
        let error = WorkoutError::UnknownDiscipline("BIK".into());
        assert_eq!(
            format_error(&package, &error),
            "package BIK:1,2: unknown discipline code: \"BIK\""
        );
    }

    #[test]
    fn format_outcomes_skips_failures() {
        let outcomes = vec![
            PackageOutcome {
                package: Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
                outcome: Ok(swim()),
            },
            PackageOutcome {
                package: Package::new("BIK", vec![]),
                outcome: Err(WorkoutError::UnknownDiscipline("BIK".into())),
            },
        ];
        let lines = format_outcomes(&outcomes, OutputFormat::Text).unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn disciplines_table() {
        let table = format_disciplines();
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("SWM  Swimming"));
        assert!(table.contains("WLK  SportsWalking  4 values"));
    }

    #[test]
    fn write_lines_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_to_file(&path, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
