use crate::math::Real;
use na::RealField;

/// Converts an angle from radians to degrees.
#[inline]
pub fn to_degrees(rad: Real) -> Real {
    rad / Real::pi() * 180.0
}

/// Converts an angle from degrees to radians.
#[inline]
pub fn to_radians(deg: Real) -> Real {
    deg / 180.0 * Real::pi()
}

/// The angle of the vector `(dx, dy)`, normalized to `[0, 360)` degrees.
///
/// The angle is measured from the 3 o'clock direction and grows toward negative `y`,
/// i.e., counter-clockwise on a screen where `y` points down. If `as_degrees` is `false`
/// the same angle is returned in radians, in `[0, 2π)`.
///
/// `dx == 0.0` goes through an infinite `dy / dx`: the result is still in range when
/// `dy != 0.0` but is `NaN` for the null vector.
pub fn full_atan(dx: Real, dy: Real, as_degrees: bool) -> Real {
    let mut angle = -to_degrees((dy / dx).atan());

    if dx < 0.0 {
        angle += 180.0;
    } else if dy > 0.0 {
        angle += 360.0;
    }

    // Tiny negative angles round up to 360.
    if angle >= 360.0 {
        angle -= 360.0;
    }

    // Turns a `-0.0` into `0.0`.
    angle += 0.0;

    if as_degrees {
        angle
    } else {
        to_radians(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_radians_conversions() {
        assert_relative_eq!(to_degrees(Real::pi()), 180.0);
        assert_relative_eq!(to_radians(90.0), Real::frac_pi_2());

        for i in -20..20 {
            let a = i as Real * 0.37;
            assert_relative_eq!(to_radians(to_degrees(a)), a, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn full_atan_quadrants() {
        assert_relative_eq!(full_atan(1.0, 0.0, true), 0.0);
        assert_relative_eq!(full_atan(1.0, -1.0, true), 45.0, epsilon = 1.0e-4);
        assert_relative_eq!(full_atan(-1.0, -1.0, true), 135.0, epsilon = 1.0e-4);
        assert_relative_eq!(full_atan(-1.0, 0.0, true), 180.0);
        assert_relative_eq!(full_atan(-1.0, 1.0, true), 225.0, epsilon = 1.0e-4);
        assert_relative_eq!(full_atan(1.0, 1.0, true), 315.0, epsilon = 1.0e-4);
        assert_relative_eq!(
            full_atan(-1.0, 1.0, false),
            Real::pi() * 1.25,
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn full_atan_vertical_vectors() {
        assert_relative_eq!(full_atan(0.0, -1.0, true), 90.0, epsilon = 1.0e-4);
        assert_relative_eq!(full_atan(0.0, 1.0, true), 270.0, epsilon = 1.0e-4);
        assert!(full_atan(0.0, 0.0, true).is_nan());
    }

    #[test]
    fn full_atan_is_never_negative_zero() {
        assert!(full_atan(2.0, 0.0, true).is_sign_positive());
        assert!(full_atan(2.0, -0.0, true).is_sign_positive());
    }
}
