// Shared helpers for the integration test suites.

use quadtree_core::Rectangle;

/// A predicate for `(f64, f64)` elements: is the point inside the region.
#[allow(dead_code)]
pub fn point_in_region(point: &(f64, f64), region: &Rectangle) -> bool {
    region.contains(point.0, point.1)
}
