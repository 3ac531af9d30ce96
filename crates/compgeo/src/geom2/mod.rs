//! Strict 2D hull geometry.
//!
//! Purpose
//! - Convex hull of a finite point set via Andrew's monotone chain, split into
//!   an upper and a lower chain that are built independently and merged.
//! - Shoelace area of any ordered polygon.
//!
//! Numerics
//! - Equality and ordering use a relative tolerance (`REL_EPS`, see `tolerance`).
//! - The turn predicate compares the raw cross product against exactly zero.
//!   Near-collinear triples on the tolerance boundary can therefore survive as
//!   hull vertices; tests pin this behavior down.
//!
//! Layout
//! - `tolerance` → `order` → `orient` → `hull`; `area` is independent.
//! - `rand`: seeded point clouds for tests, benches and the CLI.

mod area;
mod hull;
mod order;
mod orient;
pub mod rand;
mod tolerance;
mod types;

pub use area::{area, signed_area};
pub use hull::{convex_hull, convex_hull_with};
pub use order::{cmp_xy, sort_xy};
pub use orient::{check_convexity, turn};
pub use tolerance::{
    point_sets_approx_eq, points_approx_eq, points_approx_eq_eps, scalar_approx_eq,
    scalar_approx_eq_eps, REL_EPS,
};
pub use types::{HullCfg, Point2};
