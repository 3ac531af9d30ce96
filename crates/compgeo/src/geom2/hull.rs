//! Monotone-chain convex hull: two independent half-hulls, then a merge.
//!
//! - `half_hull` scans the sorted points once (forward for `Upper`, backward
//!   for `Lower`) and keeps a stack of vertices; each new point pops every
//!   vertex that no longer makes a strict convex turn.
//! - `convex_hull_with` sorts, builds both chains (as a `rayon::join` pair
//!   from `HullCfg::parallel_min_len` points on), and concatenates them.
//!
//! The two chains read the same immutable slice and own disjoint outputs, so
//! the only synchronization is the join before merging.

use super::order::sort_xy;
use super::orient::check_convexity;
use super::types::{HullCfg, Point2};

/// Which monotone chain to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Chain {
    /// First to last sorted point.
    Upper,
    /// Last to first sorted point.
    Lower,
}

/// Convex hull with default configuration. See `convex_hull_with`.
#[inline]
pub fn convex_hull(points: Vec<Point2>) -> Vec<Point2> {
    convex_hull_with(points, &HullCfg::default())
}

/// Convex hull of `points`.
///
/// Pre: none; empty, duplicate-heavy, collinear and non-finite inputs are fine.
/// Post:
/// - fewer than 3 points: returned unchanged (no sorting);
/// - otherwise the hull vertices, starting at the smallest point in X/Y order,
///   every consecutive triple passing `check_convexity`, no closing repeat.
///
/// `points` is consumed because it is sorted in place; clone first to keep
/// the original order.
pub fn convex_hull_with(mut points: Vec<Point2>, cfg: &HullCfg) -> Vec<Point2> {
    if points.len() < 3 {
        return points;
    }
    sort_xy(&mut points, cfg.eps_rel);
    let sorted = points.as_slice();

    let (upper, lower) = if cfg.runs_parallel(sorted.len()) {
        rayon::join(
            || half_hull(sorted, Chain::Upper),
            || half_hull(sorted, Chain::Lower),
        )
    } else {
        (
            half_hull(sorted, Chain::Upper),
            half_hull(sorted, Chain::Lower),
        )
    };
    merge(upper, lower)
}

/// Upper chain followed by the interior of the lower chain.
///
/// Both chains run between the first and last sorted points; the lower
/// chain's endpoints repeat the upper chain's, so they are dropped.
fn merge(mut upper: Vec<Point2>, lower: Vec<Point2>) -> Vec<Point2> {
    if lower.len() > 2 {
        upper.extend_from_slice(&lower[1..lower.len() - 1]);
    }
    upper
}

/// One monotone chain over `sorted` (len ≥ 2) in the scan order of `chain`.
pub(crate) fn half_hull(sorted: &[Point2], chain: Chain) -> Vec<Point2> {
    debug_assert!(sorted.len() >= 2, "half_hull needs at least two points");
    match chain {
        Chain::Upper => scan(sorted.iter().copied(), sorted.len()),
        Chain::Lower => scan(sorted.iter().rev().copied(), sorted.len()),
    }
}

fn scan(points: impl Iterator<Item = Point2>, len_hint: usize) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(len_hint);
    for p in points {
        out.push(p);
        // the first two points seed the chain unconditionally
        while out.len() > 2 {
            let e = out.len() - 1;
            if check_convexity(out[e - 2], out[e - 1], out[e]) {
                break;
            }
            // drop the penultimate vertex; the new point moves into its slot
            out.swap_remove(e - 1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn sorted(mut pts: Vec<Point2>) -> Vec<Point2> {
        sort_xy(&mut pts, crate::geom2::REL_EPS);
        pts
    }

    #[test]
    fn half_hulls_of_square_with_center() {
        let pts = sorted(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.5, 0.5],
        ]);
        let upper = half_hull(&pts, Chain::Upper);
        let lower = half_hull(&pts, Chain::Lower);
        assert_eq!(upper, vec![vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]]);
        assert_eq!(lower, vec![vector![1.0, 1.0], vector![1.0, 0.0], vector![0.0, 0.0]]);
    }

    #[test]
    fn half_hull_of_two_points_is_the_pair() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(half_hull(&pts, Chain::Upper), pts);
        assert_eq!(
            half_hull(&pts, Chain::Lower),
            vec![vector![1.0, 0.0], vector![0.0, 0.0]]
        );
    }

    #[test]
    fn collinear_points_reduce_to_endpoints() {
        let pts: Vec<Point2> = (0..10).map(|i| vector![i as f64, 2.0 * i as f64]).collect();
        let hull = convex_hull(pts);
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![9.0, 18.0]]);
    }

    #[test]
    fn all_duplicates_collapse() {
        let p = vector![2.5, -1.0];
        let hull = convex_hull(vec![p; 7]);
        assert!(hull.len() <= 2);
        assert!(hull.iter().all(|q| *q == p));
    }

    #[test]
    fn small_inputs_are_returned_unchanged() {
        assert!(convex_hull(Vec::new()).is_empty());
        let one = vec![vector![4.0, 4.0]];
        assert_eq!(convex_hull(one.clone()), one);
        // no sorting below three points
        let two = vec![vector![1.0, 0.0], vector![0.0, 0.0]];
        assert_eq!(convex_hull(two.clone()), two);
    }

    #[test]
    fn merge_drops_lower_endpoints() {
        let upper = vec![vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]];
        let lower = vec![vector![1.0, 1.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert_eq!(
            merge(upper, lower),
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0]
            ]
        );
        let upper = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        let lower = vec![vector![1.0, 0.0], vector![0.0, 0.0]];
        assert_eq!(merge(upper.clone(), lower), upper);
    }

    #[test]
    fn join_gate_follows_cfg() {
        let cfg = HullCfg::default();
        assert!(!cfg.runs_parallel(cfg.parallel_min_len - 1));
        assert!(cfg.runs_parallel(cfg.parallel_min_len));
        assert!(!HullCfg::sequential().runs_parallel(1 << 30));
        assert!(HullCfg::parallel().runs_parallel(3));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let pts: Vec<Point2> = (0..900)
            .map(|i| {
                let t = i as f64 * 0.37;
                vector![t.cos() * (1.0 + 0.1 * (3.0 * t).sin()), t.sin()]
            })
            .collect();
        let seq = convex_hull_with(pts.clone(), &HullCfg::sequential());
        let par = convex_hull_with(pts.clone(), &HullCfg::parallel());
        let default = convex_hull(pts);
        assert_eq!(seq, par);
        assert_eq!(seq, default);
    }
}
