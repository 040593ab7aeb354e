pub mod ac;
pub mod bc;
pub mod converter;

use thiserror::Error;

use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;
use crate::model::limits::AxisLimits;

/// Largest admissible residual of the I/J/K compatibility check.
pub const PRECONDITION_TOLERANCE: f64 = 1e-5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    #[error(
        "incompatible I/J/K for this convention: {convention} needs {requirement} = 0, \
         got {residual:.6}"
    )]
    Precondition {
        convention: Convention,
        requirement: &'static str,
        residual: f64,
    },
    #[error(
        "{axis} outside limits {limits}: {}",
        format_candidates(.axis, .candidates)
    )]
    LimitViolation {
        axis: &'static str,
        limits: AxisLimits,
        candidates: Vec<AxisPair>,
    },
}

fn format_candidates(axis: &str, candidates: &[AxisPair]) -> String {
    candidates
        .iter()
        .map(|p| format!("{axis}={:.3} C={:.3}", p.tilt, p.c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// (tilt, C) → (I, J, K) for the given chain.
pub fn forward(convention: Convention, pair: AxisPair) -> EulerTriplet {
    match convention {
        Convention::Bc => bc::forward(pair),
        Convention::Ac => ac::forward(pair),
    }
}

/// (I, J, K) → every algebraic (tilt, C) solution, preferred first.
pub fn inverse(
    convention: Convention,
    euler: EulerTriplet,
) -> Result<Vec<AxisPair>, KinematicsError> {
    match convention {
        Convention::Bc => bc::inverse(euler),
        Convention::Ac => ac::inverse(euler),
    }
}
