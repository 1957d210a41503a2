//! Point projection.

pub use self::point_line::{project, project_point_on_line, project_points};

mod point_line;
