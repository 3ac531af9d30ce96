use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use compgeo::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use compgeo::{api, HullCfg};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "convex-hull-area")]
#[command(about = "Print the area of the convex hull of a 2D point file")]
struct Cmd {
    /// Point file: JSON array of {"X": .., "Y": ..}; `.csv`/`.parquet` need X and Y columns
    input: Option<PathBuf>,

    /// Also write the hull vertices (JSON) plus a `<stem>.report.json` summary
    #[arg(long)]
    hull_out: Option<PathBuf>,

    /// Build both hull chains on two threads from this many points on
    #[arg(long)]
    parallel_min: Option<usize>,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Write a seeded random point file (JSON)
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Circle,
    Segment,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
            Shape::Circle => CloudShape::Circle,
            Shape::Segment => CloudShape::Segment,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // stdout carries only the result
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Some(Action::Sample {
            shape,
            count,
            radius,
            jitter,
            seed,
            index,
            out,
        }) => {
            let cfg = CloudCfg {
                shape: shape.into(),
                count,
                radius,
                jitter,
                ..CloudCfg::default()
            };
            sample(cfg, ReplayToken { seed, index }, &out)
        }
        None => {
            let Some(input) = cmd.input else {
                bail!("missing parameter, provide a point file");
            };
            let mut cfg = HullCfg::default();
            if let Some(n) = cmd.parallel_min {
                cfg.parallel_min_len = n;
            }
            let area = run(&input, cmd.hull_out.as_deref(), &cfg)?;
            println!("{area}");
            Ok(())
        }
    }
}

/// Load, hull, area; optionally persist the hull. Returns the area.
fn run(input: &Path, hull_out: Option<&Path>, cfg: &HullCfg) -> Result<f64> {
    let points = input::load_points(input)?;
    let n = points.len();
    tracing::info!(input = %input.display(), points = n, "decoded");
    let bounds = hull_out.and_then(|_| report::Bounds::of(&points));

    let (hull, area) = api::hull_area(points, cfg);
    tracing::info!(vertices = hull.len(), parallel = n >= cfg.parallel_min_len, "hull");
    tracing::debug!(area, "area");

    if let Some(out) = hull_out {
        write_hull(out, &hull)?;
        let summary = report::HullReport::new(input, n, bounds, &hull, area, cfg);
        let path = report::write_report(out, &summary)?;
        tracing::info!(out = %out.display(), report = %path.display(), "hull written");
    }
    Ok(area)
}

fn write_hull(out: &Path, hull: &[compgeo::Point2]) -> Result<()> {
    create_parent(out)?;
    std::fs::write(out, input::encode_json(hull)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(shape = ?cfg.shape, count = cfg.count, seed = tok.seed, index = tok.index, "sample");
    let points = draw_cloud(cfg, tok);
    create_parent(out)?;
    std::fs::write(out, input::encode_json(&points)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
