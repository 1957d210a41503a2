//! Various unsorted geometrical and logical operators.

pub use self::angle::{full_atan, to_degrees, to_radians};
pub use self::convexity::{is_convex_poly2d, polygon_winding, Winding};

mod angle;
mod convexity;
