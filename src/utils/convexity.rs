use crate::math::{Point, Real};
use na::RealField;
use num::Zero;

/// The orientation of a closed polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Vertices turn counter-clockwise in a y-up frame (positive signed area).
    CounterClockwise,
    /// Vertices turn clockwise in a y-up frame (negative signed area).
    Clockwise,
}

/// Computes the orientation of a closed polygon from its signed area.
///
/// Returns `None` if the polygon has a null area (less than three points, or all
/// points aligned).
pub fn polygon_winding(poly: &[Point<Real>]) -> Option<Winding> {
    let mut double_area: Real = 0.0;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        double_area += a.x * b.y - b.x * a.y;
    }

    if double_area > 0.0 {
        Some(Winding::CounterClockwise)
    } else if double_area < 0.0 {
        Some(Winding::Clockwise)
    } else {
        None
    }
}

/// Tests if the closed polygon `poly` is convex, whatever its orientation.
///
/// Every pair of consecutive edges must turn the same way, and the boundary must
/// go around exactly once (this rejects self-intersecting stars). Collinear
/// consecutive edges and repeated vertices are ignored.
pub fn is_convex_poly2d(poly: &[Point<Real>]) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let mut sign: Real = 0.0;
    let mut total_turn: Real = 0.0;

    for i1 in 0..poly.len() {
        let i2 = (i1 + 1) % poly.len();
        let i3 = (i2 + 1) % poly.len();
        let e1 = poly[i2] - poly[i1];
        let e2 = poly[i3] - poly[i2];
        let perp = e1.perp(&e2);

        if perp.is_zero() {
            continue;
        }

        if sign.is_zero() {
            sign = perp;
        } else if sign * perp < 0.0 {
            return false;
        }

        total_turn += perp.atan2(e1.dot(&e2));
    }

    // A convex boundary turns by exactly ±2π; a star turns by a multiple of it.
    !sign.is_zero() && total_turn.abs() < Real::pi() * 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(pts: &[[Real; 2]]) -> Vec<Point<Real>> {
        pts.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn convex_quads_in_both_orientations() {
        let ccw = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();

        assert!(is_convex_poly2d(&ccw));
        assert!(is_convex_poly2d(&cw));
        assert_eq!(polygon_winding(&ccw), Some(Winding::CounterClockwise));
        assert_eq!(polygon_winding(&cw), Some(Winding::Clockwise));
    }

    #[test]
    fn concave_quads() {
        // Arrow-head shape, reflex vertex at (1, 1).
        let arrow = poly(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [1.0, 3.0]]);
        assert!(!is_convex_poly2d(&arrow));

        // The cursor-shaped quad of the collision demo.
        let cursor = poly(&[
            [1793.8955, 857.32355],
            [1993.8955, 1257.3236],
            [1993.8955, 1057.3236],
            [2193.8955, 1157.3236],
        ]);
        assert!(!is_convex_poly2d(&cursor));
    }

    #[test]
    fn collinear_vertices_are_ignored() {
        let square = poly(&[
            [0.0, 0.0],
            [0.5, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
        ]);
        assert!(is_convex_poly2d(&square));
    }

    #[test]
    fn degenerate_polygons_are_not_convex() {
        assert!(!is_convex_poly2d(&poly(&[[0.0, 0.0], [1.0, 1.0]])));
        assert!(!is_convex_poly2d(&poly(&[
            [0.0, 0.0],
            [1.0, 1.0],
            [2.0, 2.0]
        ])));
        assert_eq!(polygon_winding(&poly(&[[0.0, 0.0], [1.0, 1.0]])), None);
    }

    #[test]
    fn pentagram_is_not_convex() {
        let mut star = Vec::new();
        for i in 0..5 {
            let angle = (i * 2) as Real * Real::two_pi() / 5.0;
            star.push(Point::new(angle.cos(), angle.sin()));
        }
        assert!(!is_convex_poly2d(&star));
    }
}
