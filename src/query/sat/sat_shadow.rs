use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Tests if the shadows of two point sets projected on the same line overlap.
///
/// Each shadow is measured by the diagonal of its bounding box, which is the shadow
/// length since all its points are aligned. The shadows overlap if they are together
/// at least as long as the span covering both. Touching shadows overlap.
///
/// An empty set casts no shadow and never overlaps anything.
pub fn shadow_test(set1: &[Point<Real>], set2: &[Point<Real>]) -> bool {
    let aabb1 = Aabb::from_points_ref(set1);
    let aabb2 = Aabb::from_points_ref(set2);

    if !aabb1.is_valid() || !aabb2.is_valid() {
        return false;
    }

    let total_length = aabb1.diagonal_length() + aabb2.diagonal_length();
    let combined_span = aabb1.merged(&aabb2).diagonal_length();
    debug_assert!(
        !total_length.is_nan() && !combined_span.is_nan(),
        "NaN shadow lengths: {total_length} and {combined_span}."
    );

    total_length >= combined_span
}
