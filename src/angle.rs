use crate::constants::{Degree, Radian, RADEG};

/// Returns the principal value of an angle in degrees, in [0, 360).
///
/// `rem_euclid` keeps the result non-negative for negative inputs, so an angle
/// and the same angle shifted by any multiple of 360° reduce to the same value
/// and produce bit-identical downstream results.
pub(crate) fn principal_angle_deg(angle: Degree) -> Degree {
    angle.rem_euclid(360.0)
}

pub(crate) fn deg_to_rad(angle: Degree) -> Radian {
    angle * RADEG
}

/// Cosine of an angle in degrees, exact at the quadrant boundaries.
///
/// `(90.0_f64).to_radians().cos()` is on the order of 1e-17 rather than zero
/// because π/2 is not representable. The quadrant angles are special-cased so
/// that the radial velocity vanishes exactly at 90° and 270°, where the star
/// moves across the line of sight.
pub(crate) fn cos_deg(angle: Degree) -> f64 {
    let a = principal_angle_deg(angle);
    if a == 90.0 || a == 270.0 {
        0.0
    } else if a == 180.0 {
        -1.0
    } else {
        deg_to_rad(a).cos()
    }
}

/// Sine of an angle in degrees, exact at the quadrant boundaries.
pub(crate) fn sin_deg(angle: Degree) -> f64 {
    let a = principal_angle_deg(angle);
    if a == 0.0 || a == 180.0 {
        0.0
    } else if a == 270.0 {
        -1.0
    } else {
        deg_to_rad(a).sin()
    }
}

#[cfg(test)]
mod angle_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_principal_angle_deg() {
        assert_eq!(principal_angle_deg(0.0), 0.0);
        assert_eq!(principal_angle_deg(360.0), 0.0);
        assert_eq!(principal_angle_deg(450.0), 90.0);
        assert_eq!(principal_angle_deg(-90.0), 270.0);
        assert_eq!(principal_angle_deg(730.5), 10.5);
    }

    #[test]
    fn test_quadrant_exactness() {
        assert_eq!(cos_deg(90.0), 0.0);
        assert_eq!(cos_deg(270.0), 0.0);
        assert_eq!(cos_deg(180.0), -1.0);
        assert_eq!(cos_deg(0.0), 1.0);
        assert_eq!(sin_deg(0.0), 0.0);
        assert_eq!(sin_deg(180.0), 0.0);
        assert_eq!(sin_deg(90.0), 1.0);
        assert_eq!(sin_deg(270.0), -1.0);
    }

    #[test]
    fn test_matches_radian_trig_away_from_quadrants() {
        for angle in [12.3, 45.0, 133.7, 201.9, 359.99] {
            assert_relative_eq!(cos_deg(angle), (angle * RADEG).cos(), epsilon = 1e-15);
            assert_relative_eq!(sin_deg(angle), (angle * RADEG).sin(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_wrapped_angle_is_bit_identical() {
        // 123.5 is exactly representable, so adding 360 stays exact and the
        // wrapped angle reduces to the same f64.
        let angle = 123.5;
        assert_eq!(cos_deg(angle), cos_deg(angle + 360.0));
        assert_eq!(sin_deg(angle), sin_deg(angle - 720.0));
    }
}
