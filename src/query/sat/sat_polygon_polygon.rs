use crate::math::{Point, Real};
use crate::query::point::project_points;
use crate::query::sat::{shadow_test, SatOptions};
use crate::shape::{Line, Polygon, PolygonError, Segment};

/// Finds the first edge normal of `poly1` or `poly2` along which their shadows are disjoint.
///
/// The edges of `poly1` are tried first, in order, then those of `poly2`. Returns `None`
/// if every edge normal shows overlapping shadows, i.e., if the polygons collide. Both
/// polygons are assumed to be convex; the result is meaningless otherwise.
///
/// If every edge is skipped as degenerate, both polygons are reduced to points and the
/// `x` then `y` axes are tried instead. If either polygon has no vertex at all, the `x`
/// axis is returned since nothing collides with an empty polygon.
pub fn polygon_polygon_find_separating_axis(
    poly1: &[Point<Real>],
    poly2: &[Point<Real>],
    options: &SatOptions,
) -> Option<Line> {
    if poly1.is_empty() || poly2.is_empty() {
        return Some(Line::x_axis());
    }

    let threshold = options.vertical_slope_threshold;
    let mut num_tested_axes = 0;

    for (i, edge) in polygon_edges(poly1).chain(polygon_edges(poly2)).enumerate() {
        if options.skip_degenerate_edges && edge.is_degenerate(options.degenerate_edge_epsilon) {
            log::debug!("SAT: skipping the degenerate edge {i}: {edge:?}");
            continue;
        }

        let axis = edge.line(threshold).normal_axis(threshold);
        num_tested_axes += 1;

        if is_separating_axis(poly1, poly2, &axis) {
            log::trace!("SAT: the normal of the edge {i} is a separating axis: {axis:?}");
            return Some(axis);
        }
    }

    // Only degenerate edges: both polygons are points, fall back to the coordinate axes.
    if num_tested_axes == 0 {
        log::debug!("SAT: no edge provided an axis, testing the coordinate axes.");
        return [Line::x_axis(), Line::y_axis()]
            .into_iter()
            .find(|axis| is_separating_axis(poly1, poly2, axis));
    }

    None
}

fn is_separating_axis(poly1: &[Point<Real>], poly2: &[Point<Real>], axis: &Line) -> bool {
    let shadow1 = project_points(poly1, axis);
    let shadow2 = project_points(poly2, axis);
    !shadow_test(shadow1.points(), shadow2.points())
}

/// Tests if two convex polygons collide, using the Separating Axis Theorem.
///
/// Polygons touching along an edge or at a vertex are considered colliding.
/// Concave polygons are not detected and give wrong results.
#[inline]
pub fn collision_test_sat(poly1: &[Point<Real>], poly2: &[Point<Real>]) -> bool {
    collision_test_sat_with_options(poly1, poly2, &SatOptions::default())
}

/// Tests if two convex polygons collide, using the Separating Axis Theorem.
///
/// See [`collision_test_sat`].
#[inline]
pub fn collision_test_sat_with_options(
    poly1: &[Point<Real>],
    poly2: &[Point<Real>],
    options: &SatOptions,
) -> bool {
    polygon_polygon_find_separating_axis(poly1, poly2, options).is_none()
}

/// Tests if two validated convex polygons collide.
#[inline]
pub fn polygons_collide(poly1: &Polygon, poly2: &Polygon) -> bool {
    collision_test_sat(poly1.vertices(), poly2.vertices())
}

/// Tests if two convex polygons, given as parallel coordinate arrays, collide.
///
/// Fails if either polygon has less than three vertices or a non-finite coordinate.
pub fn collision_test_sat_from_columns(
    xs1: &[Real],
    ys1: &[Real],
    xs2: &[Real],
    ys2: &[Real],
) -> Result<bool, PolygonError> {
    let poly1 = Polygon::from_columns(xs1, ys1)?;
    let poly2 = Polygon::from_columns(xs2, ys2)?;
    Ok(polygons_collide(&poly1, &poly2))
}

fn polygon_edges(poly: &[Point<Real>]) -> impl Iterator<Item = Segment> + '_ {
    (0..poly.len()).map(move |i| Segment::new(poly[i], poly[(i + 1) % poly.len()]))
}
