//! Planar convex hulls and polygon areas.
//!
//! The crate is small on purpose: one strict 2D module (`geom2`) with a
//! tolerance-aware monotone-chain hull, the shoelace area, and seeded point
//! samplers for tests and benches. File I/O lives in the `convex-hull-area`
//! binary; nothing here touches the filesystem.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.
//! - Inputs are taken by value where the algorithm reorders them, so a
//!   caller's collection is never mutated as a side effect.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{HullCfg, Point2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{
        area, check_convexity, convex_hull, convex_hull_with, points_approx_eq,
        scalar_approx_eq, signed_area, HullCfg, Point2,
    };
    pub use nalgebra::Vector2 as Vec2;
}
