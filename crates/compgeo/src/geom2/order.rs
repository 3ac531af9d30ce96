//! Lexicographic point order (X, then Y) with tolerant X ties.
//!
//! `cmp_xy` is the pairwise rule. It is not transitive for chains of
//! near-equal X once `eps` is large enough to matter, and `slice::sort_by`
//! may panic on a non-total order, so `sort_xy` never hands `cmp_xy` to the
//! sort routine:
//! 1. exact lexicographic sort (IEEE total order on X, then Y);
//! 2. each run of points whose X is tolerantly equal to the run's first X is
//!    re-sorted by Y.
//!
//! At `REL_EPS` (below machine epsilon) distinct finite X values are never
//! tolerantly equal; the only runs step 2 reorders are mixes of `-0.0` and
//! `0.0`, which `total_cmp` separates but `cmp_xy` treats as one X. The
//! result is exactly the `cmp_xy` order.

use std::cmp::Ordering;

use super::tolerance::scalar_approx_eq_eps;
use super::types::Point2;

/// X ascending; if X values are tolerantly equal, Y ascending.
#[inline]
pub fn cmp_xy(a: &Point2, b: &Point2, eps: f64) -> Ordering {
    if scalar_approx_eq_eps(a.x, b.x, eps) {
        a.y.total_cmp(&b.y)
    } else {
        a.x.total_cmp(&b.x)
    }
}

/// Sort in place by X then Y, grouping tolerantly equal X values (see module docs).
pub fn sort_xy(points: &mut [Point2], eps: f64) {
    points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    let n = points.len();
    let mut start = 0;
    while start < n {
        let anchor = points[start].x;
        let mut end = start + 1;
        while end < n && scalar_approx_eq_eps(anchor, points[end].x, eps) {
            end += 1;
        }
        // runs with bit-identical X are already ordered by Y; -0.0 and 0.0 differ here
        if points[start..end]
            .iter()
            .any(|p| p.x.to_bits() != anchor.to_bits())
        {
            points[start..end].sort_unstable_by(|a, b| a.y.total_cmp(&b.y));
        }
        start = end;
    }
}
