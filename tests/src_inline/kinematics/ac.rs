use super::*;
use approx::assert_abs_diff_eq;

use crate::model::angle::angle_diff;

#[test]
fn forward_closed_form_is_exact() {
    assert_eq!(forward(AxisPair::new(45.0, 30.0)), EulerTriplet::new(30.0, 45.0, 0.0));
    assert_eq!(forward(AxisPair::new(-20.0, 270.0)), EulerTriplet::new(-90.0, -20.0, 0.0));
}

#[test]
fn forward_agrees_with_matrix_decomposition() {
    for (a, c) in [(45.0, 30.0), (110.0, -75.0), (1.0, 179.0)] {
        let pair = AxisPair::new(a, c);
        let closed = forward(pair);
        let decomposed = EulerTriplet::from_matrix(&pair.to_matrix(Convention::Ac));
        assert_abs_diff_eq!(angle_diff(closed.i, decomposed.i), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(closed.j, decomposed.j, epsilon = 1e-9);
        assert_abs_diff_eq!(closed.k, decomposed.k, epsilon = 1e-9);
    }
}

#[test]
fn inverse_returns_both_solutions() {
    let solutions = inverse(EulerTriplet::new(30.0, 45.0, 0.0)).expect("solvable");
    assert_eq!(solutions, vec![AxisPair::new(45.0, 30.0), AxisPair::new(-45.0, -150.0)]);
}

#[test]
fn inverse_rejects_incompatible_k() {
    let err = inverse(EulerTriplet::new(0.0, 60.0, 90.0)).unwrap_err();
    assert!(matches!(
        err,
        KinematicsError::Precondition {
            convention: Convention::Ac,
            ..
        }
    ));
}

#[test]
fn inverse_accepts_half_turn_k() {
    let solutions = inverse(EulerTriplet::new(30.0, 45.0, 180.0)).expect("solvable");
    assert_eq!(solutions[1].tilt, -45.0);
    let tool = EulerTriplet::new(30.0, 45.0, 180.0).tool_axis();
    for pair in solutions {
        let axis = pair.to_matrix(Convention::Ac).z_axis;
        assert_abs_diff_eq!(axis.x, tool.x, epsilon = 1e-9);
        assert_abs_diff_eq!(axis.y, tool.y, epsilon = 1e-9);
        assert_abs_diff_eq!(axis.z, tool.z, epsilon = 1e-9);
    }
}

#[test]
fn round_trip_includes_vertical_tool() {
    for a in [-120.0, -45.0, 0.0, 15.0, 120.0] {
        for c in [-180.0, -10.0, 0.0, 95.0] {
            let solutions = inverse(forward(AxisPair::new(a, c))).expect("solvable");
            assert!(
                solutions
                    .iter()
                    .any(|s| (s.tilt - a).abs() < 1e-3 && angle_diff(s.c, c).abs() < 1e-3),
                "A={a} C={c}: {solutions:?}"
            );
        }
    }
}

#[test]
fn gimbal_zero_sums_i_and_k() {
    let solutions = inverse(EulerTriplet::new(100.0, 0.0, 100.0)).expect("solvable");
    assert_eq!(solutions, vec![AxisPair::new(0.0, -160.0)]);
}

#[test]
fn inverse_at_flip_pole_reproduces_orientation() {
    let euler = EulerTriplet::new(30.0, 180.0, 25.0);
    let solutions = inverse(euler).expect("solvable");
    assert_eq!(solutions, vec![AxisPair::new(180.0, 5.0), AxisPair::new(-180.0, 5.0)]);
    let expected = euler.to_matrix();
    for pair in solutions {
        let actual = pair.to_matrix(Convention::Ac);
        for (a, e) in actual.to_cols_array().iter().zip(expected.to_cols_array()) {
            assert_abs_diff_eq!(*a, e, epsilon = 1e-9);
        }
    }
}
