use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{PointSet, Segment};
use crate::utils::{self, Winding};

/// Indicates why a set of points can't be used as a polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon needs at least three vertices.
    #[error("a polygon must have at least 3 vertices, found {found}.")]
    NotEnoughPoints {
        /// The number of vertices that were given.
        found: usize,
    },
    /// One of the vertices is `NaN` or infinite.
    #[error("the vertex {index} has a non-finite coordinate.")]
    NonFiniteCoordinate {
        /// The index of the faulty vertex.
        index: usize,
    },
    /// The vertices don't span at least three distinct points.
    #[error("a polygon must have at least 3 distinct vertices, found {distinct}.")]
    Degenerate {
        /// The number of distinct vertices that were given.
        distinct: usize,
    },
}

/// A planar polygon with at least three distinct finite vertices.
///
/// Two consecutive vertices determine an edge; the last edge joins the last vertex
/// back to the first one. Neither convexity nor orientation are enforced: use
/// [`Polygon::is_convex`] and [`Polygon::winding`] to inspect them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "PointSet", into = "PointSet")
)]
#[derive(PartialEq, Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Builds a new polygon from its ordered vertices.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::NotEnoughPoints {
                found: vertices.len(),
            });
        }

        if let Some(index) = vertices
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(PolygonError::NonFiniteCoordinate { index });
        }

        let distinct = vertices
            .iter()
            .enumerate()
            .filter(|&(i, pt)| !vertices[..i].contains(pt))
            .count();

        if distinct < 3 {
            return Err(PolygonError::Degenerate { distinct });
        }

        Ok(Self { vertices })
    }

    /// Builds a new polygon from parallel arrays of `x` and `y` coordinates.
    ///
    /// Extra coordinates of the longest array are ignored.
    pub fn from_columns(xs: &[Real], ys: &[Real]) -> Result<Self, PolygonError> {
        Self::new(PointSet::from_columns(xs, ys).into_points())
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a polygon has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `i`-th edge, from vertex `i` to vertex `i + 1` (modulo the vertex count).
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Iterates through all the edges of this polygon.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Is this polygon convex?
    ///
    /// See [`utils::is_convex_poly2d`].
    #[inline]
    pub fn is_convex(&self) -> bool {
        utils::is_convex_poly2d(&self.vertices)
    }

    /// Is this polygon concave (or self-intersecting, or flat)?
    #[inline]
    pub fn is_concave(&self) -> bool {
        !self.is_convex()
    }

    /// The orientation of this polygon, or `None` if it has a null area.
    #[inline]
    pub fn winding(&self) -> Option<Winding> {
        utils::polygon_winding(&self.vertices)
    }

    /// The axis-aligned bounding box of this polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// Copies the vertices of this polygon into a point set.
    pub fn to_point_set(&self) -> PointSet {
        PointSet::new(self.vertices.clone())
    }
}

impl TryFrom<PointSet> for Polygon {
    type Error = PolygonError;

    fn try_from(set: PointSet) -> Result<Self, Self::Error> {
        Self::new(set.into_points())
    }
}

impl From<Polygon> for PointSet {
    fn from(poly: Polygon) -> Self {
        PointSet::new(poly.vertices)
    }
}

impl AsRef<[Point<Real>]> for Polygon {
    #[inline]
    fn as_ref(&self) -> &[Point<Real>] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_needs_three_vertices() {
        let err = Polygon::from_columns(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, PolygonError::NotEnoughPoints { found: 2 });
        assert_eq!(
            err.to_string(),
            "a polygon must have at least 3 vertices, found 2."
        );
        assert!(Polygon::from_columns(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]).is_ok());
    }

    #[test]
    fn polygon_rejects_non_finite_vertices() {
        let err = Polygon::from_columns(&[0.0, 1.0, Real::NAN], &[0.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(err, PolygonError::NonFiniteCoordinate { index: 2 });
    }

    #[test]
    fn polygon_rejects_coincident_vertices() {
        let p = Point::new(3.0, -1.0);
        assert_eq!(
            Polygon::new(vec![p; 3]),
            Err(PolygonError::Degenerate { distinct: 1 })
        );
        assert_eq!(
            Polygon::new(vec![p, Point::origin(), p, Point::origin()]),
            Err(PolygonError::Degenerate { distinct: 2 })
        );
        // Flat but spanning three points.
        assert!(Polygon::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).is_ok());
    }

    #[cfg(feature = "serde-serialize")]
    #[test]
    fn deserialization_validates_polygons() {
        let poly = Polygon::from_columns(&[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0]).unwrap();
        let bytes = bincode::serialize(&poly).unwrap();
        assert_eq!(bincode::deserialize::<Polygon>(&bytes).unwrap(), poly);

        let set = PointSet::from_columns(&[0.0, 1.0], &[0.0, 1.0]);
        let bytes = bincode::serialize(&set).unwrap();
        assert!(bincode::deserialize::<Polygon>(&bytes).is_err());

        let set = PointSet::new(vec![Point::new(1.0, 1.0); 4]);
        let bytes = bincode::serialize(&set).unwrap();
        assert!(bincode::deserialize::<Polygon>(&bytes).is_err());
    }

    #[test]
    fn polygon_edges_wrap_around() {
        let poly = Polygon::from_columns(&[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0]).unwrap();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], Segment::new(Point::new(0.0, 2.0), Point::new(0.0, 0.0)));
        assert_eq!(poly.winding(), Some(Winding::CounterClockwise));
        assert!(poly.is_convex());
        assert!(!poly.is_concave());
    }

    #[test]
    fn concave_polygon() {
        let poly = Polygon::from_columns(&[0.0, 1.0, 2.0, 1.0], &[0.0, 1.0, 0.0, 3.0]).unwrap();
        assert!(poly.is_concave());
        assert_eq!(poly.local_aabb().extents(), crate::math::Vector::new(2.0, 3.0));
    }
}
