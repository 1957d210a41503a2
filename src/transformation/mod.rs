//! Transformations of point sets.

pub use self::rotate_points::{rotate_point_set, rotate_points};

mod rotate_points;
