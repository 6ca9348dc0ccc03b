use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graham::api::{
    draw_points, graham_scan, CloudCfg, CloudShape, Hull, HullCfg, PolarSort, ReplayToken,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{write_sidecar, Params, Sidecar};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Convex hulls of point tables (Graham scan)")]
struct Cmd {
    /// Optional free-form run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of an x/y point table and write it as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = SortArg::Unstable)]
        sort: SortArg,
        /// Return point/segment hulls instead of failing on degenerate input
        #[arg(long)]
        allow_degenerate: bool,
    },
    /// Write a reproducible random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1.0)]
        extent: f64,
        /// Snap coordinates to integers
        #[arg(long)]
        lattice: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Bubble,
    Unstable,
}

impl From<SortArg> for PolarSort {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Bubble => PolarSort::Bubble,
            SortArg::Unstable => PolarSort::Unstable,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Disc,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Disc => CloudShape::Disc,
        }
    }
}

/// JSON shape of `hull run` output.
#[derive(Debug, Serialize)]
struct HullOut {
    input_points: usize,
    vertices: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
}

impl HullOut {
    fn new(input_points: usize, hull: &Hull) -> Self {
        Self {
            input_points,
            vertices: hull.vertices().iter().map(|v| [v.x, v.y]).collect(),
            area: hull.area(),
            perimeter: hull.perimeter(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            sort,
            allow_degenerate,
        } => {
            let mut cfg = HullCfg::default().with_sort(sort.into());
            if allow_degenerate {
                cfg = cfg.allow_degenerate();
            }
            run(&input, &out, cfg, cmd.tag).map(|_| ())
        }
        Action::Sample {
            count,
            seed,
            index,
            shape,
            extent,
            lattice,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.into(),
                extent,
                lattice,
            };
            sample(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run(input: &Path, out: &Path, cfg: HullCfg, tag: Option<String>) -> Result<HullOut> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        sort = ?cfg.sort,
        degenerate = ?cfg.degenerate,
        tag = ?tag,
        "run"
    );
    let pts = points::read_points(input)?;
    let hull = graham_scan(&pts, &cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(points = pts.len(), vertices = hull.len(), area = hull.area(), "hull");

    let result = HullOut::new(pts.len(), &hull);
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = Params::Run {
        input: input.to_string_lossy().into_owned(),
        sort: format!("{:?}", cfg.sort),
        degenerate: format!("{:?}", cfg.degenerate),
    };
    write_sidecar(out, params, tag)?;
    Ok(result)
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "sample"
    );
    let pts = draw_points(cfg, tok);
    ensure_parent(out)?;
    points::write_points(out, &pts)?;
    let params = Params::Sample {
        count: cfg.count,
        shape: format!("{:?}", cfg.shape),
        extent: cfg.extent,
        lattice: cfg.lattice,
        seed: tok.seed,
        index: tok.index,
    };
    write_sidecar(out, params, tag)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let record = Sidecar::new(Params::Report, tag);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
