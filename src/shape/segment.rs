//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use crate::shape::Line;

/// A segment shape, e.g., one edge of a polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Is this segment shorter than `eps`?
    #[inline]
    pub fn is_degenerate(&self, eps: Real) -> bool {
        self.length() <= eps
    }

    /// The not-normalized normal of this segment, pointing to its right-hand side.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let dir = self.scaled_direction();
        Vector::new(dir.y, -dir.x)
    }

    /// The infinite line supporting this segment.
    ///
    /// See [`Line::through_points_with_threshold`].
    #[inline]
    pub fn line(&self, vertical_slope_threshold: Real) -> Line {
        Line::through_points_with_threshold(&self.a, &self.b, vertical_slope_threshold)
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
