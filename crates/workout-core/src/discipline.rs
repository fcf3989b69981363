//! Workout disciplines and their sensor codes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::WorkoutError;
use crate::constants::{LEN_STEP_M, LEN_STROKE_M};

/// The kind of exercise a package describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Discipline {
    /// Swimming in a pool (`SWM`).
    Swimming,
    /// Running (`RUN`).
    Running,
    /// Sports walking (`WLK`).
    SportsWalking,
}

impl Discipline {
    /// Every discipline, in the order the sensors list them.
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a discipline by its three-letter sensor code.
    ///
    /// Matching is exact: `"run"` is not `"RUN"`.
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            _ => Err(WorkoutError::UnknownDiscipline(code.to_string())),
        }
    }

    /// The sensor code for this discipline.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// The workout type name shown in summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package for this discipline carries.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Distance covered by one sensor action, in meters.
    #[must_use]
    pub fn action_length_m(self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => LEN_STEP_M,
            Self::Swimming => LEN_STROKE_M,
        }
    }

    /// Names of the positional values, in package order.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }
}

impl FromStr for Discipline {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
