//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Besides its usual use as a coarse bound, the diagonal of an `Aabb` measures the
/// length of a set of points known to be aligned: this is what the shadow test of
/// [`crate::query::sat`] relies on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner).
    pub mins: Point<Real>,
    /// The point with maximum coordinates (top-right corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs` components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    ///
    /// An empty set results in an invalid AABB, see [`Aabb::is_valid`].
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(*pt);
        }
        result
    }

    /// Does this AABB contain at least one point?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x <= self.maxs.x && self.mins.y <= self.maxs.y
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The length of the diagonal of this `Aabb`.
    #[inline]
    pub fn diagonal_length(&self) -> Real {
        let extents = self.extents();
        extents.x.hypot(extents.y)
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Merges this `Aabb` with another one. The merge is done in-place.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest `Aabb` containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Do `self` and `other` overlap? Touching boxes do.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aabb_of_points() {
        let pts = [Point::new(1.0, -2.0), Point::new(-3.0, 4.0), Point::new(0.0, 0.0)];
        let aabb = Aabb::from_points_ref(&pts);
        assert_eq!(aabb.mins, Point::new(-3.0, -2.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 4.0));
        assert_eq!(aabb.center(), Point::new(-1.0, 1.0));
        assert!(aabb.is_valid());
        assert!(!Aabb::from_points_ref(&[] as &[Point<Real>]).is_valid());
    }

    #[test]
    fn aabb_diagonal_and_merge() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let b = Aabb::new(Point::new(3.0, 4.0), Point::new(6.0, 8.0));
        assert_relative_eq!(a.diagonal_length(), 5.0);
        assert_relative_eq!(a.merged(&b).diagonal_length(), 10.0);
        assert!(a.intersects(&b));

        let mut c = a;
        c.merge(&Aabb::new(Point::new(-1.0, 0.0), Point::new(0.0, 1.0)));
        assert_eq!(c.mins, Point::new(-1.0, 0.0));
    }
}
