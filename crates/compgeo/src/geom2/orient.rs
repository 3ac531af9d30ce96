//! Turn predicate for three ordered points.
//!
//! Sign convention: `turn(a, b, c) = (c - b) × (b - a)`. A positive value is a
//! clockwise turn in the usual y-up frame, i.e. a left turn in a y-down
//! (screen) frame. Hull chains keep only positive turns, which fixes the
//! hull vertex order.

use super::types::Point2;

/// `(c - b) × (b - a) = BCx·ABy − BCy·ABx`.
#[inline]
pub fn turn(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let bc = c - b;
    bc.x * ab.y - bc.y * ab.x
}

/// `true` iff `a → b → c` is a strict convex turn (`turn > 0`).
///
/// The comparison against zero is exact: collinear triples, coincident points
/// (zero-length segments) and reflex turns are all rejected, while a triple
/// that is collinear only up to rounding may pass.
#[inline]
pub fn check_convexity(a: Point2, b: Point2, c: Point2) -> bool {
    turn(a, b, c) > 0.0
}
