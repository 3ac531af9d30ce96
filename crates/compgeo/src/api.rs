//! Curated API surface.
//!
//! Re-exports the operations callers need without reaching into module
//! paths. Names follow the operations they implement:
//! hull construction, area, orientation, tolerant comparison, ordering.

// Hull + area
pub use crate::geom2::{area, convex_hull, convex_hull_with, signed_area, HullCfg, Point2};
// Predicates
pub use crate::geom2::{check_convexity, turn};
// Tolerant comparison and ordering
pub use crate::geom2::{
    cmp_xy, point_sets_approx_eq, points_approx_eq, points_approx_eq_eps, scalar_approx_eq,
    scalar_approx_eq_eps, sort_xy, REL_EPS,
};
// Seeded point clouds
pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};

/// Hull of `points` followed by its area; the pipeline run by the CLI.
///
/// Pre: none (any finite or empty collection).
/// Post: returns `(hull, area(hull))`; fewer than 3 input points give area 0.
pub fn hull_area(points: Vec<Point2>, cfg: &HullCfg) -> (Vec<Point2>, f64) {
    let hull = convex_hull_with(points, cfg);
    let a = area(&hull);
    (hull, a)
}
