//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not** intersect
//! if and only if there exists an axis (a line) onto which the projections of the two shapes
//! do not overlap.
//!
//! In simpler terms: if you can find a direction where, when you "shine a light" from that
//! direction and look at the shadows cast by both shapes, those shadows don't overlap, then
//! the shapes are not colliding.
//!
//! # How Does SAT Work Here?
//!
//! For two convex polygons, the only candidate axes that need testing are the normals of
//! their edges:
//!
//! 1. **Build the axis**: the line perpendicular to the edge, through the origin.
//! 2. **Project both polygons onto the axis**: every vertex is orthogonally projected on it
//!    (see [`crate::query::project_points`]).
//! 3. **Check for overlap** with [`shadow_test`]. The first axis without overlap proves the
//!    polygons are separated and ends the test.
//!
//! If every edge normal shows overlapping shadows, the polygons collide. Touching shadows
//! count as overlapping, so polygons sharing an edge or a vertex collide.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use shadow2d::math::{Point, Vector};
//! use shadow2d::query::sat::collision_test_sat;
//!
//! let square1 = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let square2 = square1.map(|pt| pt + Vector::new(0.5, 0.5));
//! let square3 = square1.map(|pt| pt + Vector::new(2.0, 2.0));
//!
//! assert!(collision_test_sat(&square1, &square2));
//! assert!(!collision_test_sat(&square1, &square3));
//! # }
//! ```
//!
//! Only convex polygons are supported. Concave ones are not rejected but give wrong
//! answers: check them first with [`crate::shape::Polygon::is_convex`]. Circles are not
//! handled either.

pub use self::sat_options::SatOptions;
pub use self::sat_polygon_polygon::*;
pub use self::sat_shadow::shadow_test;

mod sat_options;
mod sat_polygon_polygon;
mod sat_shadow;
