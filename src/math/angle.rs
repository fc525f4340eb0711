use glam::Vec2;

/// Wraps `degrees` into `(-180, 180]`.
///
/// The positive end is closed and the negative end open, so `-180` maps to `180`.
/// Non-finite input is returned unchanged.
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return degrees;
    }
    // rem_euclid may round up to exactly 360, which still lands on 0 below.
    let r = degrees.rem_euclid(360.0);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Signed angle in degrees that rotates `from` onto `to`, in `[-180, 180]`.
///
/// Positive is counter-clockwise. Zero when either vector is degenerate.
pub fn signed_angle_degrees(from: Vec2, to: Vec2) -> f32 {
    if from.length_squared() < 1e-12 || to.length_squared() < 1e-12 {
        return 0.0;
    }
    from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize_degrees(200.0), -160.0);
        assert_eq!(normalize_degrees(-200.0), 160.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(45.0), 45.0);
    }

    #[test]
    fn huge_rotations_wrap_without_looping() {
        for degrees in [1e10, -1e10, f32::MAX, f32::MIN, 8_589_934_592.0] {
            let r = normalize_degrees(degrees);
            assert!(r > -180.0 && r <= 180.0, "{degrees} -> {r}");
        }
        assert_eq!(normalize_degrees(-1e-8), 0.0);
    }

    #[test]
    fn signed_angle_sign_and_magnitude() {
        let a = signed_angle_degrees(Vec2::X, Vec2::Y);
        assert!((a - 90.0).abs() < 1e-4);
        let b = signed_angle_degrees(Vec2::Y, Vec2::X);
        assert!((b + 90.0).abs() < 1e-4);
        assert_eq!(signed_angle_degrees(Vec2::ZERO, Vec2::X), 0.0);
    }
}
