use std::fmt;

use glam::DMat3;
use serde::{Deserialize, Serialize};

use crate::model::angle::AngleDeg;
use crate::model::limits::{AxisLimits, MachineLimits};

/// Which physical tilt axis is composed with the C rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convention {
    /// B around Y, then C around Z.
    #[serde(rename = "BC")]
    Bc,
    /// A around X, then C around Z.
    #[serde(rename = "AC")]
    Ac,
}

impl Convention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Bc => "BC",
            Convention::Ac => "AC",
        }
    }

    pub fn tilt_name(&self) -> &'static str {
        match self {
            Convention::Bc => "B",
            Convention::Ac => "A",
        }
    }

    pub fn tilt_limits(&self, limits: &MachineLimits) -> AxisLimits {
        match self {
            Convention::Bc => limits.b,
            Convention::Ac => limits.a,
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine rotary-axis position: tilt (B or A) plus C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPair {
    pub tilt: AngleDeg,
    pub c: AngleDeg,
}

impl AxisPair {
    pub const fn new(tilt: AngleDeg, c: AngleDeg) -> Self {
        Self { tilt, c }
    }

    /// M = R_Z(C) · R_tilt(tilt).
    pub fn to_matrix(&self, convention: Convention) -> DMat3 {
        let rz = DMat3::from_rotation_z(self.c.to_radians());
        let tilt = self.tilt.to_radians();
        match convention {
            Convention::Bc => rz * DMat3::from_rotation_y(tilt),
            Convention::Ac => rz * DMat3::from_rotation_x(tilt),
        }
    }
}

/// One inverse-kinematics candidate, annotated against the tilt axis limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisSolution {
    #[serde(flatten)]
    pub pair: AxisPair,
    pub within_limits: bool,
}

impl AxisSolution {
    pub fn annotate(pair: AxisPair, limits: &AxisLimits) -> Self {
        Self {
            pair,
            within_limits: limits.contains(pair.tilt),
        }
    }
}
