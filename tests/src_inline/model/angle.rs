use super::*;

#[test]
fn normalize_maps_into_half_open_range() {
    assert_eq!(normalize_deg(0.0), 0.0);
    assert_eq!(normalize_deg(180.0), -180.0);
    assert_eq!(normalize_deg(-180.0), -180.0);
    assert_eq!(normalize_deg(270.0), -90.0);
    assert_eq!(normalize_deg(-270.0), 90.0);
    assert_eq!(normalize_deg(720.0 + 45.0), 45.0);
    assert_eq!(normalize_deg(88.0), 88.0);
    assert_eq!(normalize_deg(268.0), -92.0);
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        -1e6, -1080.5, -540.0, -180.00000000000003, -180.0, -179.999, -90.0, -1e-12, -0.0, 0.0,
        1e-12, 0.1, 45.0, 179.99999999, 180.0, 359.999, 360.0, 540.0, 1234.567, 1e6,
    ];
    for x in samples {
        let once = normalize_deg(x);
        assert_eq!(normalize_deg(once), once, "x = {x}");
        assert!((-180.0..180.0).contains(&once), "x = {x} -> {once}");
    }
}

#[test]
fn angle_diff_wraps() {
    assert_eq!(angle_diff(179.0, -179.0), -2.0);
    assert_eq!(angle_diff(-92.0, 88.0), -180.0);
}

#[test]
fn gimbal_poles() {
    assert_eq!(gimbal_pole(0.0), Some(GimbalPole::Zero));
    assert_eq!(gimbal_pole(360.0), Some(GimbalPole::Zero));
    assert_eq!(gimbal_pole(180.0), Some(GimbalPole::Flip));
    assert_eq!(gimbal_pole(-180.0), Some(GimbalPole::Flip));
    assert_eq!(gimbal_pole(36.0), None);
    assert_eq!(gimbal_pole(1e-3), None);
}
