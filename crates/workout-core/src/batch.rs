//! Batch execution of sensor packages.

use tracing::{debug, info};

use crate::calculator::WorkoutError;
use crate::package::Package;
use crate::registry;
use crate::summary::WorkoutResult;

/// Outcome of processing a single package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    /// The package as received.
    pub package: Package,
    /// The computed statistics or a structured error.
    pub outcome: Result<WorkoutResult, WorkoutError>,
}

impl PackageOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Dispatch and summarize every package in order.
///
/// With `fail_fast`, processing stops after the first failing package; the
/// failure is still included in the returned list.
pub fn execute_packages(packages: &[Package], fail_fast: bool) -> Vec<PackageOutcome> {
    let mut outcomes = Vec::with_capacity(packages.len());
    for package in packages {
        let outcome = registry::read(package).map(|training| training.summary());
        let failed = outcome.is_err();
        if let Err(e) = &outcome {
            info!(package = %package, error = %e, "package rejected");
        }
        outcomes.push(PackageOutcome {
            package: package.clone(),
            outcome,
        });
        if failed && fail_fast {
            debug!(remaining = packages.len() - outcomes.len(), "stopping after failure");
            break;
        }
    }
    outcomes
}

/// The first error among the outcomes, if any.
#[must_use]
pub fn first_error(outcomes: &[PackageOutcome]) -> Option<&WorkoutError> {
    outcomes.iter().find_map(|o| o.outcome.as_ref().err())
}
