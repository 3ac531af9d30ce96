//! Seeded point clouds (shapes + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for hull property tests, benches and the CLI
//!   `sample` subcommand. Each draw is addressed by `(seed, index)`.
//!
//! Shapes
//! - `Square`, `Disk`: uniform in `[-r, r]²` / the disk of radius `r`. Most
//!   points are interior, hulls stay small.
//! - `Circle`: points on the circle of radius `r`, radially jittered by
//!   `jitter·r`. Many points land on the hull.
//! - `Segment`: points on the segment from `(-r,-r/2)` to `(r,r/2)`, offset
//!   normally by `jitter·r`. `jitter = 0` gives exactly collinear input.
//!
//! `duplicate_frac` re-emits that fraction of already drawn points verbatim.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Cloud shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
    Circle,
    Segment,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    pub count: usize,
    /// Scale of the shape (half side, radius, half length).
    pub radius: f64,
    /// Relative noise for `Circle` and `Segment`. Clamped to `>= 0`.
    pub jitter: f64,
    /// Fraction of points that repeat an earlier point. Clamped to `[0, 1]`.
    pub duplicate_frac: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Disk,
            count: 1000,
            radius: 1.0,
            jitter: 0.0,
            duplicate_frac: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Same `(cfg, tok)` always yields the same cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius;
    let jitter = cfg.jitter.max(0.0);
    let dup = cfg.duplicate_frac.clamp(0.0, 1.0);
    let mut out: Vec<Point2> = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        if !out.is_empty() && dup > 0.0 && rng.gen::<f64>() < dup {
            let k = rng.gen_range(0..out.len());
            out.push(out[k]);
            continue;
        }
        let p = match cfg.shape {
            CloudShape::Square => {
                Vector2::new(rng.gen_range(-1.0f64..=1.0) * r, rng.gen_range(-1.0f64..=1.0) * r)
            }
            CloudShape::Disk => {
                // sqrt for uniform density in the disk
                let rho = rng.gen::<f64>().sqrt() * r;
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(th.cos() * rho, th.sin() * rho)
            }
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let rho = r * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter);
                Vector2::new(th.cos() * rho, th.sin() * rho)
            }
            CloudShape::Segment => {
                let t = rng.gen_range(-1.0f64..=1.0);
                let off = (rng.gen::<f64>() * 2.0 - 1.0) * jitter * r;
                // unit normal of direction (2, 1) is (-1, 2)/√5
                let n = Vector2::new(-1.0, 2.0) / 5f64.sqrt();
                Vector2::new(t * r, t * r * 0.5) + n * off
            }
        };
        out.push(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible_and_indexed() {
        let cfg = CloudCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = draw_cloud(cfg, tok);
        let b = draw_cloud(cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), cfg.count);
        let c = draw_cloud(cfg, ReplayToken { seed: 7, index: 4 });
        assert_ne!(a, c);
    }

    #[test]
    fn shapes_respect_their_bounds() {
        let tok = ReplayToken { seed: 11, index: 0 };
        for shape in [CloudShape::Square, CloudShape::Disk] {
            let cfg = CloudCfg {
                shape,
                count: 500,
                radius: 2.0,
                ..CloudCfg::default()
            };
            for p in draw_cloud(cfg, tok) {
                assert!(p.x.abs() <= 2.0 && p.y.abs() <= 2.0);
                if shape == CloudShape::Disk {
                    assert!(p.norm() <= 2.0 + 1e-12);
                }
            }
        }
        let ring = CloudCfg {
            shape: CloudShape::Circle,
            count: 500,
            radius: 1.0,
            jitter: 0.1,
            ..CloudCfg::default()
        };
        for p in draw_cloud(ring, tok) {
            let n = p.norm();
            assert!((0.9 - 1e-12..=1.1 + 1e-12).contains(&n));
        }
    }

    #[test]
    fn duplicates_repeat_earlier_points() {
        let cfg = CloudCfg {
            shape: CloudShape::Square,
            count: 200,
            duplicate_frac: 0.5,
            ..CloudCfg::default()
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 5, index: 0 });
        let mut distinct = pts.clone();
        distinct.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        distinct.dedup();
        assert!(distinct.len() < pts.len());
    }
}
