use super::*;
use approx::assert_abs_diff_eq;

use crate::model::angle::angle_diff;

#[test]
fn decomposes_regular_orientation() {
    let euler = EulerTriplet::new(-60.0, 35.0, 110.0);
    let back = EulerTriplet::from_matrix(&euler.to_matrix());
    assert_abs_diff_eq!(back.i, -60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(back.j, 35.0, epsilon = 1e-9);
    assert_abs_diff_eq!(back.k, 110.0, epsilon = 1e-9);
}

#[test]
fn gimbal_zero_folds_k_into_i() {
    let euler = EulerTriplet::new(30.0, 0.0, 25.0);
    let back = EulerTriplet::from_matrix(&euler.to_matrix());
    assert_abs_diff_eq!(back.i, 55.0, epsilon = 1e-9);
    assert_eq!(back.j, 0.0);
    assert_eq!(back.k, 0.0);
}

#[test]
fn gimbal_flip_keeps_difference() {
    let euler = EulerTriplet::new(30.0, 180.0, 25.0);
    let back = EulerTriplet::from_matrix(&euler.to_matrix());
    assert_abs_diff_eq!(angle_diff(back.i, 5.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(back.j, 180.0, epsilon = 1e-9);
    assert_eq!(back.k, 0.0);
}

#[test]
fn tool_axis_of_identity_is_z() {
    let axis = EulerTriplet::new(0.0, 0.0, 0.0).tool_axis();
    assert_abs_diff_eq!(axis.x, 0.0);
    assert_abs_diff_eq!(axis.y, 0.0);
    assert_abs_diff_eq!(axis.z, 1.0);
}

#[test]
fn tool_axis_ignores_k() {
    let a = EulerTriplet::new(20.0, 50.0, 0.0).tool_axis();
    let b = EulerTriplet::new(20.0, 50.0, 137.0).tool_axis();
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
}
