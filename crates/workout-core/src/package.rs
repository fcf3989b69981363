//! Sensor packages: one discipline code plus its positional values.

use std::fmt;
use std::str::FromStr;

use crate::calculator::WorkoutError;

/// A raw `(code, values)` tuple as produced by a fitness sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Discipline code, e.g. `"RUN"`.
    pub code: String,
    /// Positional measurements in the order the discipline expects.
    pub values: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// The packages processed when no input is supplied.
#[must_use]
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15_000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9_000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parses `CODE:v1,v2,...`.
impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, rest) = s
            .split_once(':')
            .ok_or_else(|| WorkoutError::MalformedPackage(format!("missing ':' in {s:?}")))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(WorkoutError::MalformedPackage(format!(
                "missing discipline code in {s:?}"
            )));
        }

        let values = rest
            .split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<f64>().map_err(|_| {
                    WorkoutError::MalformedPackage(format!("{item:?} is not a number"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(code, values))
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
