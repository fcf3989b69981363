//! Workout formulas and the `Training` tagged union.
//!
//! `WorkoutInput` holds the measurements every discipline shares.
//! `Training` pairs them with a private discipline kind holding the extras, so
//! a pool length can only exist on a swimming session. Every constructor
//! validates its measurements and the statistics they produce; once built, a
//! `Training` always yields finite statistics.

use crate::constants::{running, swimming, walking, M_IN_KM, MIN_IN_H};
use crate::discipline::Discipline;
use crate::summary::WorkoutResult;

/// Error type for workout dispatch and calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    /// The package code does not name a known discipline.
    #[error("unknown discipline code: {0:?}")]
    UnknownDiscipline(String),

    /// The package carried the wrong number of values for its discipline.
    #[error("{discipline} expects {expected} values, got {actual}")]
    ArgumentCount {
        discipline: Discipline,
        expected: usize,
        actual: usize,
    },

    /// A measurement was outside its valid range.
    #[error("invalid measurement {field} = {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A package could not be parsed from text.
    #[error("malformed package: {0}")]
    MalformedPackage(String),
}

impl WorkoutError {
    fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidMeasurement {
            field,
            value,
            reason,
        }
    }
}

/// Reject non-finite, zero, and negative values.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(WorkoutError::invalid(field, value, "must be positive"));
    }
    Ok(value)
}

/// Convert a raw sensor value into a positive whole count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn require_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid(field, value, "must be a finite number"));
    }
    if value.fract() != 0.0 {
        return Err(WorkoutError::invalid(field, value, "must be a whole number"));
    }
    if value <= 0.0 {
        return Err(WorkoutError::invalid(field, value, "must be positive"));
    }
    if value > f64::from(u32::MAX) {
        return Err(WorkoutError::invalid(field, value, "is too large"));
    }
    // Whole, positive, and within u32 range: the cast is exact.
    Ok(value as u32)
}

/// Reject computed statistics that overflowed.
fn require_finite(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorkoutError::invalid(field, value, "result out of range"))
    }
}

/// Measurements shared by every discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutInput {
    /// Validate and build the shared measurements.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        if action_count == 0 {
            return Err(WorkoutError::invalid("action_count", 0.0, "must be positive"));
        }
        Ok(Self {
            action_count,
            duration_hours: require_positive("duration_hours", duration_hours)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes recorded by the sensor.
    #[must_use]
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Session length in hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Discipline-specific extras.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Running,
    SportsWalking { height_cm: f64 },
    Swimming { pool_length_m: u32, pool_laps: u32 },
}

/// A validated workout session of a concrete discipline.
///
/// Only the checked constructors can build one:
///
/// ```compile_fail
/// use workout_core::calculator::{Training, WorkoutInput};
///
/// let input = WorkoutInput::new(9000, 1.0, 75.0).unwrap();
/// let _ = Training::SportsWalking { input, height_cm: 0.0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    input: WorkoutInput,
    kind: Kind,
}

impl Training {
    /// Build a running session.
    pub fn running(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        let input = WorkoutInput::new(action_count, duration_hours, weight_kg)?;
        Self::checked(input, Kind::Running)
    }

    /// Build a sports walking session.
    pub fn sports_walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let input = WorkoutInput::new(action_count, duration_hours, weight_kg)?;
        let height_cm = require_positive("height_cm", height_cm)?;
        Self::checked(input, Kind::SportsWalking { height_cm })
    }

    /// Build a swimming session.
    pub fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        let input = WorkoutInput::new(action_count, duration_hours, weight_kg)?;
        if pool_length_m == 0 {
            return Err(WorkoutError::invalid("pool_length_m", 0.0, "must be positive"));
        }
        if pool_laps == 0 {
            return Err(WorkoutError::invalid("pool_laps", 0.0, "must be positive"));
        }
        Self::checked(
            input,
            Kind::Swimming {
                pool_length_m,
                pool_laps,
            },
        )
    }

    /// Finite measurements can still overflow the formulas; reject those.
    fn checked(input: WorkoutInput, kind: Kind) -> Result<Self, WorkoutError> {
        let training = Self { input, kind };
        require_finite("distance_km", training.distance_km())?;
        require_finite("mean_speed_kmh", training.mean_speed_kmh())?;
        require_finite("calories", training.spent_calories())?;
        Ok(training)
    }

    /// The discipline of this session.
    #[must_use]
    pub fn discipline(&self) -> Discipline {
        match self.kind {
            Kind::Running => Discipline::Running,
            Kind::SportsWalking { .. } => Discipline::SportsWalking,
            Kind::Swimming { .. } => Discipline::Swimming,
        }
    }

    /// The shared measurements.
    #[must_use]
    pub fn input(&self) -> &WorkoutInput {
        &self.input
    }

    /// Athlete height, for sports walking sessions.
    #[must_use]
    pub fn height_cm(&self) -> Option<f64> {
        match self.kind {
            Kind::SportsWalking { height_cm } => Some(height_cm),
            _ => None,
        }
    }

    /// Pool length in meters and laps swum, for swimming sessions.
    #[must_use]
    pub fn pool(&self) -> Option<(u32, u32)> {
        match self.kind {
            Kind::Swimming {
                pool_length_m,
                pool_laps,
            } => Some((pool_length_m, pool_laps)),
            _ => None,
        }
    }

    /// Distance covered, in kilometers.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.input.action_count) * self.discipline().action_length_m() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            Kind::Swimming {
                pool_length_m,
                pool_laps,
            } => {
                f64::from(pool_length_m) * f64::from(pool_laps)
                    / M_IN_KM
                    / self.input.duration_hours
            }
            _ => self.distance_km() / self.input.duration_hours,
        }
    }

    /// Calories spent during the session.
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let WorkoutInput {
            duration_hours,
            weight_kg,
            ..
        } = self.input;
        match self.kind {
            Kind::Running => {
                (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * duration_hours
                    * MIN_IN_H
            }
            Kind::SportsWalking { height_cm } => {
                let height_term = (self.distance_km().powi(2) / height_cm).floor();
                (walking::WEIGHT_MULTIPLIER * weight_kg
                    + height_term * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_hours
                    * MIN_IN_H
            }
            Kind::Swimming { .. } => {
                (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// Compute every statistic and pack them into a result record.
    #[must_use]
    pub fn summary(&self) -> WorkoutResult {
        WorkoutResult::new(
            self.discipline(),
            self.input.duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}
