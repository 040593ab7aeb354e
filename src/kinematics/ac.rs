//! A around X: M = R_Z(C) · R_X(A), which is already a ZXZ product with K = 0.

use crate::kinematics::{KinematicsError, PRECONDITION_TOLERANCE};
use crate::model::angle::{GimbalPole, gimbal_pole, normalize_deg};
use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;

pub fn forward(pair: AxisPair) -> EulerTriplet {
    EulerTriplet::new(normalize_deg(pair.c), pair.tilt, 0.0)
}

pub fn inverse(euler: EulerTriplet) -> Result<Vec<AxisPair>, KinematicsError> {
    let EulerTriplet { i, j, k } = euler;

    let residual = j.to_radians().sin() * k.to_radians().sin();
    if residual.abs() > PRECONDITION_TOLERANCE {
        return Err(KinematicsError::Precondition {
            convention: Convention::Ac,
            requirement: "sin(J)·sin(K)",
            residual,
        });
    }

    let solutions = match gimbal_pole(j) {
        Some(GimbalPole::Zero) => vec![AxisPair::new(0.0, normalize_deg(i + k))],
        Some(GimbalPole::Flip) => {
            let c = normalize_deg(i - k);
            vec![AxisPair::new(180.0, c), AxisPair::new(-180.0, c)]
        }
        None => vec![
            AxisPair::new(j, normalize_deg(i)),
            AxisPair::new(-j, normalize_deg(i + 180.0)),
        ],
    };
    Ok(solutions)
}

#[cfg(test)]
#[path = "../../tests/src_inline/kinematics/ac.rs"]
mod tests;
