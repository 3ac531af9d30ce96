//! Point alias and hull configuration.
//!
//! - `Point2`: plain `nalgebra` column vector; X is `.x`, Y is `.y`.
//! - `HullCfg`: tolerance and the size gate for building both chains in parallel.

use nalgebra::Vector2;

use super::tolerance::REL_EPS;

/// A point in the plane. No identity beyond its coordinates.
pub type Point2 = Vector2<f64>;

/// Hull configuration.
///
/// Results never depend on `parallel_min_len`; it only decides whether the
/// two chains are handed to the rayon pool as a join pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Relative tolerance for coordinate equality (sorting ties).
    pub eps_rel: f64,
    /// Inputs with at least this many points build the two chains concurrently.
    pub parallel_min_len: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_rel: REL_EPS,
            parallel_min_len: 512,
        }
    }
}

impl HullCfg {
    /// Never join; both chains run on the calling thread.
    #[inline]
    pub fn sequential() -> Self {
        Self {
            parallel_min_len: usize::MAX,
            ..Self::default()
        }
    }

    /// Always join on the pool for non-degenerate inputs.
    #[inline]
    pub fn parallel() -> Self {
        Self {
            parallel_min_len: 0,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn runs_parallel(&self, len: usize) -> bool {
        len >= self.parallel_min_len
    }
}
