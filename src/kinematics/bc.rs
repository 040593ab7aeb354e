//! Table-table machine with B around Y: M = R_Z(C) · R_Y(B).

use crate::kinematics::{KinematicsError, PRECONDITION_TOLERANCE};
use crate::model::angle::{GimbalPole, gimbal_pole, normalize_deg};
use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;

pub fn forward(pair: AxisPair) -> EulerTriplet {
    EulerTriplet::from_matrix(&pair.to_matrix(Convention::Bc))
}

/// The chain forces m32 = sin J · cos K to zero, so K must be ±90 unless J is a pole.
pub fn inverse(euler: EulerTriplet) -> Result<Vec<AxisPair>, KinematicsError> {
    let EulerTriplet { i, j, k } = euler;

    let residual = j.to_radians().sin() * k.to_radians().cos();
    if residual.abs() > PRECONDITION_TOLERANCE {
        return Err(KinematicsError::Precondition {
            convention: Convention::Bc,
            requirement: "sin(J)·cos(K)",
            residual,
        });
    }

    let solutions = match gimbal_pole(j) {
        Some(GimbalPole::Zero) => vec![AxisPair::new(0.0, normalize_deg(i + k))],
        // R_Y(±180) = R_Z(180) · R_X(180)
        Some(GimbalPole::Flip) => {
            let c = normalize_deg(i - k - 180.0);
            vec![AxisPair::new(180.0, c), AxisPair::new(-180.0, c)]
        }
        None => vec![
            AxisPair::new(j, normalize_deg(i - 90.0)),
            AxisPair::new(-j, normalize_deg(i + 90.0)),
        ],
    };
    Ok(solutions)
}

#[cfg(test)]
#[path = "../../tests/src_inline/kinematics/bc.rs"]
mod tests;
