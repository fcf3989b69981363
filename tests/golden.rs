//! Golden file integration tests.
//!
//! Reads tests/testdata/workouts_golden.json and verifies statistics and
//! summary lines for known workouts, plus the error kind for rejected ones.

use serde::Deserialize;

use workout_core::calculator::WorkoutError;
use workout_core::{read_package, summarize};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
    errors: Vec<GoldenError>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    code: String,
    values: Vec<f64>,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories: f64,
    message: String,
}

#[derive(Deserialize)]
struct GoldenError {
    code: String,
    values: Vec<f64>,
    kind: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/workouts_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn assert_close(actual: f64, expected: f64, what: &str, code: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{code} {what}: expected {expected}, got {actual}"
    );
}

fn error_kind(err: &WorkoutError) -> &'static str {
    match err {
        WorkoutError::UnknownDiscipline(_) => "unknown_discipline",
        WorkoutError::ArgumentCount { .. } => "argument_count",
        WorkoutError::InvalidMeasurement { .. } => "invalid_measurement",
        WorkoutError::MalformedPackage(_) => "malformed_package",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_statistics() {
    let golden = load_golden_data();
    assert!(!golden.values.is_empty());

    for entry in &golden.values {
        let training = read_package(&entry.code, &entry.values).unwrap();
        assert_close(training.distance_km(), entry.distance_km, "distance", &entry.code);
        assert_close(training.mean_speed_kmh(), entry.mean_speed_kmh, "speed", &entry.code);
        assert_close(training.spent_calories(), entry.calories, "calories", &entry.code);
    }
}

#[test]
fn golden_messages() {
    let golden = load_golden_data();

    for entry in &golden.values {
        let result = summarize(&entry.code, &entry.values).unwrap();
        assert_eq!(result.message(), entry.message, "{} message mismatch", entry.code);
    }
}

#[test]
fn golden_errors() {
    let golden = load_golden_data();
    assert!(!golden.errors.is_empty());

    for entry in &golden.errors {
        let err = summarize(&entry.code, &entry.values).unwrap_err();
        assert_eq!(
            error_kind(&err),
            entry.kind,
            "{} {:?}: unexpected error {err}",
            entry.code,
            entry.values
        );
    }
}
