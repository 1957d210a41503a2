use crate::math::{Point, Real};
use crate::shape::{Line, PointSet};

/// Orthogonally projects `pt` on `line`.
///
/// Vertical and horizontal lines are handled by replacing the relevant coordinate.
/// Other lines are intersected with their perpendicular passing through `pt`.
#[inline]
pub fn project_point_on_line(pt: &Point<Real>, line: &Line) -> Point<Real> {
    match *line {
        Line::Vertical { x } => Point::new(x, pt.y),
        Line::Sloped { slope, intercept } if slope == 0.0 => Point::new(pt.x, intercept),
        Line::Sloped { slope, intercept } => {
            debug_assert!(
                slope.is_finite(),
                "Sloped lines must have a finite slope, found {slope}."
            );
            let perp = -1.0 / slope;
            let perp_intercept = pt.y - perp * pt.x;
            let x = (perp_intercept - intercept) / (slope - perp);
            Point::new(x, slope * x + intercept)
        }
    }
}

/// Orthogonally projects every point of `pts` on `line`.
pub fn project_points(pts: &[Point<Real>], line: &Line) -> PointSet {
    pts.iter()
        .map(|pt| project_point_on_line(pt, line))
        .collect()
}

/// Orthogonally projects the points given as parallel coordinate arrays on `line`.
///
/// Extra coordinates of the longest array are ignored.
pub fn project(xs: &[Real], ys: &[Real], line: &Line) -> PointSet {
    xs.iter()
        .zip(ys.iter())
        .map(|(x, y)| project_point_on_line(&Point::new(*x, *y), line))
        .collect()
}
