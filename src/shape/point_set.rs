//! Point sets and the normalization of loosely-shaped point inputs.

use crate::math::{Point, Real};

/// An ordered set of points, e.g., the vertices of a polygon.
///
/// The points are the only data stored: the `x` and `y` columns are derived from them
/// on demand so the three views can never get out of sync.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point<Real>>,
}

impl PointSet {
    /// Creates a point set from its points.
    #[inline]
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// Creates a point set from parallel arrays of `x` and `y` coordinates.
    ///
    /// Extra coordinates of the longest array are ignored.
    pub fn from_columns(xs: &[Real], ys: &[Real]) -> Self {
        let points = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| Point::new(*x, *y))
            .collect();
        Self { points }
    }

    /// The points of this set.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The `x` coordinates of the points of this set, in order.
    pub fn x(&self) -> Vec<Real> {
        self.points.iter().map(|pt| pt.x).collect()
    }

    /// The `y` coordinates of the points of this set, in order.
    pub fn y(&self) -> Vec<Real> {
        self.points.iter().map(|pt| pt.y).collect()
    }

    /// The number of points in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes this set and returns its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }
}

impl From<Vec<Point<Real>>> for PointSet {
    fn from(points: Vec<Point<Real>>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point<Real>> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point<Real>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[Point<Real>]> for PointSet {
    #[inline]
    fn as_ref(&self) -> &[Point<Real>] {
        &self.points
    }
}

/// The shapes a point can be given as before being normalized by [`pointify`].
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum PointInput<'a> {
    /// A single array, expected to hold exactly `[x, y]`.
    Array(&'a [Real]),
    /// Two scalars `x` and `y`.
    Scalars(Real, Real),
    /// Two arrays, expected to hold exactly one element each: `[x]` and `[y]`.
    ///
    /// This is what is left when a point is sliced out of parallel coordinate arrays.
    Columns(&'a [Real], &'a [Real]),
}

/// Normalizes a loosely-shaped point input into a [`Point`].
///
/// Inputs that don't have one of the accepted shapes (see [`PointInput`]) are
/// handed back unchanged as the error.
pub fn pointify(input: PointInput) -> Result<Point<Real>, PointInput> {
    match input {
        PointInput::Array(&[x, y]) => Ok(Point::new(x, y)),
        PointInput::Scalars(x, y) => Ok(Point::new(x, y)),
        PointInput::Columns(&[x], &[y]) => Ok(Point::new(x, y)),
        _ => Err(input),
    }
}

impl<'a> TryFrom<PointInput<'a>> for Point<Real> {
    type Error = PointInput<'a>;

    #[inline]
    fn try_from(input: PointInput<'a>) -> Result<Self, Self::Error> {
        pointify(input)
    }
}
