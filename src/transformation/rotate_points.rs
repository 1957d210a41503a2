use crate::math::{Point, Real, Rotation};
use crate::shape::PointSet;
use crate::utils;

/// Rotates the points given as parallel coordinate arrays around `center`.
///
/// `angle` is in degrees unless `in_radians` is `true`. Positive angles rotate from the
/// `x` axis toward the `y` axis. Extra coordinates of the longest array are ignored.
pub fn rotate_points(
    xs: &[Real],
    ys: &[Real],
    angle: Real,
    in_radians: bool,
    center: &Point<Real>,
) -> PointSet {
    let pts = PointSet::from_columns(xs, ys);
    rotate_point_set(pts.points(), angle, in_radians, center)
}

/// Rotates every point of `pts` around `center`.
///
/// See [`rotate_points`].
pub fn rotate_point_set(
    pts: &[Point<Real>],
    angle: Real,
    in_radians: bool,
    center: &Point<Real>,
) -> PointSet {
    let angle = if in_radians {
        angle
    } else {
        utils::to_radians(angle)
    };
    let rot = Rotation::new(angle);

    pts.iter().map(|pt| center + rot * (pt - center)).collect()
}
