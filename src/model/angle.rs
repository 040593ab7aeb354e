/// An angle in degrees.
pub type AngleDeg = f64;

/// Below this distance (degrees) from 0 or 180, J is treated as a gimbal-lock pole.
pub const GIMBAL_TOLERANCE_DEG: f64 = 1e-8;

/// Maps an angle to [-180, 180).
pub fn normalize_deg(x: AngleDeg) -> AngleDeg {
    let mut wrapped = (x + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to the modulus for inputs just below a multiple of it
    if wrapped >= 360.0 {
        wrapped -= 360.0;
    }
    wrapped - 180.0
}

/// Signed shortest distance from `b` to `a`, in [-180, 180).
#[cfg(test)]
pub(crate) fn angle_diff(a: AngleDeg, b: AngleDeg) -> AngleDeg {
    normalize_deg(a - b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GimbalPole {
    /// J ≈ 0: the two Z rotations add.
    Zero,
    /// J ≈ ±180: the two Z rotations subtract.
    Flip,
}

pub fn gimbal_pole(j: AngleDeg) -> Option<GimbalPole> {
    let j = normalize_deg(j);
    if j.abs() < GIMBAL_TOLERANCE_DEG {
        Some(GimbalPole::Zero)
    } else if (j.abs() - 180.0).abs() < GIMBAL_TOLERANCE_DEG {
        Some(GimbalPole::Flip)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/angle.rs"]
mod tests;
