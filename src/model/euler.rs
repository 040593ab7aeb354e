use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::model::angle::{AngleDeg, gimbal_pole, normalize_deg};

/// ZXZ Euler angles: M = R_Z(I) · R_X(J) · R_Z(K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerTriplet {
    pub i: AngleDeg,
    pub j: AngleDeg,
    pub k: AngleDeg,
}

impl EulerTriplet {
    pub const fn new(i: AngleDeg, j: AngleDeg, k: AngleDeg) -> Self {
        Self { i, j, k }
    }

    pub fn to_matrix(&self) -> DMat3 {
        DMat3::from_rotation_z(self.i.to_radians())
            * DMat3::from_rotation_x(self.j.to_radians())
            * DMat3::from_rotation_z(self.k.to_radians())
    }

    /// ZXZ decomposition of a rotation matrix.
    ///
    /// J comes out in [0, 180]; I and K are normalized. At a gimbal-lock pole
    /// only I ± K is determined, so K is fixed to 0 and I carries the whole
    /// Z rotation.
    pub fn from_matrix(m: &DMat3) -> Self {
        // glam is column-major: m.z_axis.x is row 1, column 3.
        let m11 = m.x_axis.x;
        let m21 = m.x_axis.y;
        let m31 = m.x_axis.z;
        let m32 = m.y_axis.z;
        let m13 = m.z_axis.x;
        let m23 = m.z_axis.y;
        let m33 = m.z_axis.z;

        let j = m13.hypot(m23).atan2(m33).to_degrees();

        if gimbal_pole(j).is_some() {
            let i = m21.atan2(m11).to_degrees();
            return Self::new(normalize_deg(i), j, 0.0);
        }

        // sin J > 0 on this branch, so dividing by it leaves atan2 unchanged
        let i = m13.atan2(-m23).to_degrees();
        let k = m31.atan2(m32).to_degrees();
        Self::new(normalize_deg(i), j, normalize_deg(k))
    }

    /// Tool direction: the third column of the orientation matrix.
    pub fn tool_axis(&self) -> DVec3 {
        self.to_matrix().z_axis
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/euler.rs"]
mod tests;
