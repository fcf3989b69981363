//! Formula coefficients, unit conversions, and exit codes.

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one running or walking step, in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in meters.
pub const LEN_STROKE_M: f64 = 1.38;

/// Decimal digits shown for every number in a summary line.
pub const DISPLAY_PRECISION: usize = 3;

/// Running calorie coefficients.
pub mod running {
    /// Multiplier applied to the mean speed.
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift subtracted from the scaled mean speed.
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients.
pub mod walking {
    /// Share of body weight burned per minute regardless of pace.
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier for the distance-over-height term.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients.
pub mod swimming {
    /// Shift added to the mean speed.
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied together with body weight.
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A measurement was rejected or a package had the wrong value count.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// A package named a discipline code nobody knows.
    pub const ERROR_UNKNOWN_DISCIPLINE: i32 = 3;
    /// A package could not be parsed from its textual form.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_INPUT,
            exit_codes::ERROR_UNKNOWN_DISCIPLINE,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
