//! Shoelace area of an ordered polygon.

use super::types::Point2;

/// Signed area: positive for counter-clockwise vertex order in a y-up frame.
///
/// Sums `x_i·y_{i+1} − x_{i+1}·y_i` over consecutive pairs including the
/// wrap-around pair, then halves. Exactly `0.0` for fewer than 3 vertices.
pub fn signed_area(poly: &[Point2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let (first, last) = (poly[0], poly[n - 1]);
    let mut acc = last.x * first.y - first.x * last.y;
    for w in poly.windows(2) {
        acc += w[0].x * w[1].y - w[1].x * w[0].y;
    }
    acc / 2.0
}

/// Unsigned area of a simple polygon (convex or not). No tolerance applied.
#[inline]
pub fn area(poly: &[Point2]) -> f64 {
    signed_area(poly).abs()
}
