//! Workout result record and the summary line formatter.

use std::fmt;

use serde::Serialize;

use crate::constants::DISPLAY_PRECISION;
use crate::discipline::Discipline;

/// Statistics computed for one workout.
///
/// Values are stored unrounded; rounding happens only when the record is
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutResult {
    /// Discipline the statistics belong to.
    pub discipline: Discipline,
    /// Session length in hours.
    pub duration_hours: f64,
    /// Distance covered, in kilometers.
    pub distance_km: f64,
    /// Mean speed, in km/h.
    pub mean_speed_kmh: f64,
    /// Calories spent.
    pub calories: f64,
}

impl WorkoutResult {
    #[must_use]
    pub fn new(
        discipline: Discipline,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            discipline,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Render the one-line summary shown to the athlete.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = DISPLAY_PRECISION;
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.p$} ч.; Дистанция: {:.p$} км; \
             Ср. скорость: {:.p$} км/ч; Потрачено ккал: {:.p$}.",
            self.discipline.name(),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_layout() {
        let result = WorkoutResult::new(Discipline::Running, 1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            result.message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn message_rounds_to_three_digits() {
        let result = WorkoutResult::new(Discipline::Swimming, 0.75, 0.9936, 1.333_333_3, 12.0);
        let msg = result.message();
        assert!(msg.contains("Длительность: 0.750 ч."));
        assert!(msg.contains("Дистанция: 0.994 км"));
        assert!(msg.contains("Ср. скорость: 1.333 км/ч"));
        assert!(msg.contains("Потрачено ккал: 12.000."));
    }

    #[test]
    fn message_uses_workout_name() {
        let result = WorkoutResult::new(Discipline::SportsWalking, 1.0, 5.85, 5.85, 157.5);
        assert!(result.message().starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn serializes_raw_values() {
        let result = WorkoutResult::new(Discipline::Swimming, 1.0, 0.9936, 1.0, 336.0);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["discipline"], "Swimming");
        assert_eq!(json["distance_km"], 0.9936);
        assert_eq!(json["calories"], 336.0);
    }
}
