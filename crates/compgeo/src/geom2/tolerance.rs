//! Relative-tolerance comparison of scalars and points.
//!
//! Rule for scalars `a`, `b` with `d = |a-b|`, `s = |a|+|b|`:
//! - if `|a|`, `|b|` or `s` is below the smallest positive `f64` (the smallest
//!   subnormal), compare `d` against that value instead (absolute test);
//! - otherwise `d / min(s, f64::MAX) < eps`.
//!
//! Clamping `s` keeps the division finite when `|a|+|b|` overflows; the
//! absolute branch avoids dividing by zero.

use super::types::Point2;

/// Default relative tolerance.
pub const REL_EPS: f64 = 1e-17;

/// Smallest positive subnormal `f64` (≈ 4.9e-324).
const MIN_POSITIVE_SUBNORMAL: f64 = 5e-324;

/// `a ≈ b` under `REL_EPS`.
#[inline]
pub fn scalar_approx_eq(a: f64, b: f64) -> bool {
    scalar_approx_eq_eps(a, b, REL_EPS)
}

/// `a ≈ b` under a caller-chosen relative tolerance.
pub fn scalar_approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();
    let sum = abs_a + abs_b;
    if abs_a < MIN_POSITIVE_SUBNORMAL
        || abs_b < MIN_POSITIVE_SUBNORMAL
        || sum < MIN_POSITIVE_SUBNORMAL
    {
        return diff < MIN_POSITIVE_SUBNORMAL;
    }
    diff / sum.min(f64::MAX) < eps
}

/// Both coordinates tolerantly equal under `REL_EPS`.
#[inline]
pub fn points_approx_eq(a: Point2, b: Point2) -> bool {
    points_approx_eq_eps(a, b, REL_EPS)
}

#[inline]
pub fn points_approx_eq_eps(a: Point2, b: Point2, eps: f64) -> bool {
    scalar_approx_eq_eps(a.x, b.x, eps) && scalar_approx_eq_eps(a.y, b.y, eps)
}

/// Same length and pairwise `points_approx_eq` in order (no rotation allowed).
pub fn point_sets_approx_eq(a: &[Point2], b: &[Point2]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| points_approx_eq(*p, *q))
}
