//! Point sets, lines, segments and polygons.

pub use self::line::{intercept_calc, linify, Line};
pub use self::point_set::{pointify, PointInput, PointSet};
pub use self::polygon::{Polygon, PolygonError};
pub use self::segment::Segment;

mod line;
mod point_set;
mod polygon;
mod segment;
