//! Property tables: polygons in, CSV/Parquet out (and CSV pairs back in).

use anyhow::{Context, Result};
use polars::prelude::*;
use regpoly::Polygon;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Every derived measure of one polygon, flattened for printing.
#[derive(Debug, Serialize)]
pub struct PropertyRow {
    pub polygon: String,
    pub sides: u32,
    pub circumradius: f64,
    pub edge_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
    pub interior_angle: f64,
}

impl From<&Polygon> for PropertyRow {
    fn from(p: &Polygon) -> Self {
        Self {
            polygon: p.to_string(),
            sides: p.number_of_edges(),
            circumradius: p.circumradius(),
            edge_length: p.edge_length(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            interior_angle: p.interior_angle(),
        }
    }
}

/// Column-per-property frame, one row per polygon.
pub fn to_frame(polys: &[Polygon]) -> PolarsResult<DataFrame> {
    let col = |f: fn(&Polygon) -> f64| polys.iter().map(f).collect::<Vec<f64>>();
    df!(
        "sides" => polys.iter().map(Polygon::number_of_edges).collect::<Vec<u32>>(),
        "circumradius" => col(Polygon::circumradius),
        "edge_length" => col(Polygon::edge_length),
        "apothem" => col(Polygon::apothem),
        "area" => col(Polygon::area),
        "perimeter" => col(Polygon::perimeter),
        "interior_angle" => col(Polygon::interior_angle)
    )
}

/// Write `df` to `out`; `.parquet` selects Parquet, anything else CSV.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if out.extension().is_some_and(|ext| ext == "parquet") {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(df)?;
    }
    tracing::info!(rows = df.height(), out = %out.display(), "table_written");
    Ok(())
}

/// A CSV row that could not be turned into a polygon.
#[derive(Debug)]
pub struct Rejected {
    pub row: usize,
    pub reason: String,
}

/// Read `sides,circumradius` rows and validate each one.
pub fn read_pairs(input: &Path) -> Result<(Vec<Polygon>, Vec<Rejected>)> {
    let df = LazyCsvReader::new(input)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", input.display()))?;
    // read as float so fractional side counts are rejected, not truncated
    let sides = df.column("sides")?.cast(&DataType::Float64)?;
    let radii = df.column("circumradius")?.cast(&DataType::Float64)?;
    Ok(validate_pairs(sides.f64()?.into_iter().zip(radii.f64()?)))
}

fn validate_pairs<I>(pairs: I) -> (Vec<Polygon>, Vec<Rejected>)
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    let mut ok = Vec::new();
    let mut rejected = Vec::new();
    for (row, (n, r)) in pairs.into_iter().enumerate() {
        let parsed = match (n, r) {
            (Some(n), Some(r)) => {
                side_count(n).and_then(|n| Polygon::new(n, r).map_err(|e| e.to_string()))
            }
            _ => Err("missing value".to_string()),
        };
        match parsed {
            Ok(p) => ok.push(p),
            Err(reason) => {
                tracing::warn!(row, reason = %reason, "rejected_row");
                rejected.push(Rejected { row, reason });
            }
        }
    }
    (ok, rejected)
}

fn side_count(n: f64) -> Result<u32, String> {
    if n.fract() != 0.0 {
        return Err(format!("sides not an integer: {n}"));
    }
    if !(0.0..=u32::MAX as f64).contains(&n) {
        return Err(format!("sides out of range: {n}"));
    }
    Ok(n as u32)
}
