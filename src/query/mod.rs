//! Non-persistent geometric queries.
//!
//! * [`query::project_points()`](project_points) to project points orthogonally on a line.
//! * [`query::sat::shadow_test()`](sat::shadow_test) to test two projections for overlap.
//! * [`query::sat::collision_test_sat()`](sat::collision_test_sat) to determine if two
//!   convex polygons are intersecting or not.

pub use self::point::{project, project_point_on_line, project_points};
pub use self::sat::{collision_test_sat, polygons_collide, shadow_test, SatOptions};

pub mod point;
pub mod sat;
