//! Summary written next to `--hull-out`: what went in, what came out, and
//! the hull settings, so a saved hull can be checked against its input.

use anyhow::{Context, Result};
use compgeo::{HullCfg, Point2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::input::PointRecord;

/// Axis-aligned bounds of the input cloud.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: PointRecord,
    pub max: PointRecord,
}

impl Bounds {
    /// `None` for an empty cloud.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let (lo, hi) = points.iter().fold((*first, *first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self {
            min: PointRecord::from(&lo),
            max: PointRecord::from(&hi),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullReport {
    pub version: String,
    pub input: String,
    pub points: usize,
    pub bounds: Option<Bounds>,
    pub hull_vertices: usize,
    pub area: f64,
    pub eps_rel: f64,
    pub parallel_min_len: usize,
    pub parallel: bool,
}

impl HullReport {
    pub fn new(
        input: &Path,
        points: usize,
        bounds: Option<Bounds>,
        hull: &[Point2],
        area: f64,
        cfg: &HullCfg,
    ) -> Self {
        Self {
            version: compgeo::VERSION.to_string(),
            input: input.to_string_lossy().into_owned(),
            points,
            bounds,
            hull_vertices: hull.len(),
            area,
            eps_rel: cfg.eps_rel,
            parallel_min_len: cfg.parallel_min_len,
            parallel: points >= 3 && points >= cfg.parallel_min_len,
        }
    }
}

/// `dir/hull.json` → `dir/hull.report.json`.
pub fn report_path(hull_out: &Path) -> PathBuf {
    let stem = hull_out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    hull_out.with_file_name(format!("{stem}.report.json"))
}

/// Write the report next to `hull_out`; returns its path.
pub fn write_report(hull_out: &Path, report: &HullReport) -> Result<PathBuf> {
    let path = report_path(hull_out);
    std::fs::write(&path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
