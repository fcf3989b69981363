//! Error handling and exit codes.

use workout_core::calculator::WorkoutError;
use workout_core::constants::exit_codes;

/// Map a workout error to the process exit code.
pub fn handle_error(err: &WorkoutError) -> i32 {
    match err {
        WorkoutError::InvalidMeasurement { .. } | WorkoutError::ArgumentCount { .. } => {
            exit_codes::ERROR_INVALID_INPUT
        }
        WorkoutError::UnknownDiscipline(_) => exit_codes::ERROR_UNKNOWN_DISCIPLINE,
        WorkoutError::MalformedPackage(_) => exit_codes::ERROR_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_core::discipline::Discipline;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&WorkoutError::UnknownDiscipline("BIK".into())), 3);
        assert_eq!(handle_error(&WorkoutError::MalformedPackage("x".into())), 4);
        assert_eq!(
            handle_error(&WorkoutError::ArgumentCount {
                discipline: Discipline::Swimming,
                expected: 5,
                actual: 3,
            }),
            2
        );
        assert_eq!(
            handle_error(&WorkoutError::InvalidMeasurement {
                field: "duration_hours",
                value: 0.0,
                reason: "must be positive",
            }),
            2
        );
    }
}
