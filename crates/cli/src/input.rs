//! Point-file decoding: JSON arrays of `{ "X": .., "Y": .. }` objects, or
//! CSV/Parquet tables with `X` and `Y` columns (read through polars).

use anyhow::{anyhow, bail, Context, Result};
use compgeo::Point2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One point as it appears in JSON files. A missing coordinate reads as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointRecord {
    #[serde(rename = "X", alias = "x")]
    pub x: f64,
    #[serde(rename = "Y", alias = "y")]
    pub y: f64,
}

impl From<PointRecord> for Point2 {
    fn from(r: PointRecord) -> Self {
        Point2::new(r.x, r.y)
    }
}

impl From<&Point2> for PointRecord {
    fn from(p: &Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    /// By extension; anything unrecognized is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Format::Csv,
            Some("parquet") => Format::Parquet,
            _ => Format::Json,
        }
    }
}

/// Read and decode all points in `path`. Fails on I/O, decode, or non-finite values.
pub fn load_points(path: &Path) -> Result<Vec<Point2>> {
    let points = match Format::from_path(path) {
        Format::Json => {
            let text = std::fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?;
            decode_json(&text).with_context(|| format!("decoding {}", path.display()))?
        }
        Format::Csv => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            from_lazy(lf).with_context(|| format!("decoding {}", path.display()))?
        }
        Format::Parquet => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            from_lazy(lf).with_context(|| format!("decoding {}", path.display()))?
        }
    };
    ensure_finite(&points)?;
    Ok(points)
}

/// A top-level `null` decodes to no points.
pub fn decode_json(bytes: &[u8]) -> Result<Vec<Point2>> {
    let records: Option<Vec<PointRecord>> = serde_json::from_slice(bytes)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Point2::from)
        .collect())
}

pub fn encode_json(points: &[Point2]) -> Result<Vec<u8>> {
    let records: Vec<PointRecord> = points.iter().map(PointRecord::from).collect();
    Ok(serde_json::to_vec_pretty(&records)?)
}

fn from_lazy(lf: LazyFrame) -> Result<Vec<Point2>> {
    let df = lf
        .select([
            col("X").cast(DataType::Float64),
            col("Y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("X")?.f64()?;
    let ys = df.column("Y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing X or Y")),
        })
        .collect()
}

fn ensure_finite(points: &[Point2]) -> Result<()> {
    if let Some((i, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        bail!("point {i} is not finite: ({}, {})", p.x, p.y);
    }
    Ok(())
}
