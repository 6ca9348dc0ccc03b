//! Point tables on disk: columns `x` and `y`, CSV or Parquet.

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read `x`,`y` columns (cast to f64). Parquet by extension, CSV otherwise.
pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let lf = if path.extension().is_some_and(|e| e == "parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Vector2::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        }
    }
    tracing::info!(rows = points.len(), path = %path.display(), "points_read");
    Ok(points)
}

/// Write points as a two-column CSV.
pub fn write_points(path: &Path, points: &[Vector2<f64>]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
