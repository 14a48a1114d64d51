use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use regpoly::sample::{PolygonSampler, SampleCfg, SideCount};
use regpoly::{Polygon, TryCompare};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};
use table::{read_pairs, to_frame, write_frame, PropertyRow};

#[derive(Parser)]
#[command(name = "regpoly-cli")]
#[command(about = "Inspect, compare and tabulate regular polygons")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every derived property of one polygon
    Show {
        #[arg(long)]
        sides: u32,
        #[arg(long)]
        circumradius: f64,
        /// Emit a JSON object instead of prose
        #[arg(long)]
        json: bool,
    },
    /// Compare two polygons given as `Polygon(n, r)`
    Compare { a: String, b: String },
    /// Write a property table for a range of side counts
    Table {
        #[arg(long, default_value_t = 3)]
        sides_min: u32,
        #[arg(long, default_value_t = 12)]
        sides_max: u32,
        #[arg(long, default_value_t = 1.0)]
        circumradius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Validate a CSV of `sides,circumradius` rows and write their property table
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a property table of reproducibly sampled polygons
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 3)]
        sides_min: u32,
        #[arg(long, default_value_t = 12)]
        sides_max: u32,
        #[arg(long, default_value_t = 0.5)]
        radius_min: f64,
        #[arg(long, default_value_t = 10.0)]
        radius_max: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Show {
            sides,
            circumradius,
            json,
        } => show(sides, circumradius, json),
        Action::Compare { a, b } => compare(&a, &b),
        Action::Table {
            sides_min,
            sides_max,
            circumradius,
            out,
        } => table(sides_min, sides_max, circumradius, out, tag),
        Action::Batch { input, out } => batch(input, out, tag),
        Action::Sample {
            count,
            seed,
            sides_min,
            sides_max,
            radius_min,
            radius_max,
            out,
        } => {
            let cfg = SampleCfg {
                sides: SideCount::Uniform {
                    min: sides_min,
                    max: sides_max,
                },
                radius_min,
                radius_max,
            };
            sample(cfg, count, seed, out, tag)
        }
        Action::Report => report(tag),
    }
}

fn show(sides: u32, circumradius: f64, json: bool) -> Result<()> {
    let p = Polygon::new(sides, circumradius)?;
    tracing::info!(polygon = %p, "show");
    if json {
        println!("{}", serde_json::to_string_pretty(&PropertyRow::from(&p))?);
        return Ok(());
    }
    println!("{p}");
    println!("{p} has {} edges.", p.number_of_edges());
    println!("{p} has {} vertices.", p.number_of_vertices());
    println!("{p} has {} circumradius.", p.circumradius());
    println!("{p} has {} edge length.", p.edge_length());
    println!("{p} has {} apothem.", p.apothem());
    println!("{p} has {} area.", p.area());
    println!("{p} has {} perimeter.", p.perimeter());
    println!("{p} has {} interior angle.", p.interior_angle());
    Ok(())
}

fn compare(a: &str, b: &str) -> Result<()> {
    let a: Polygon = a.parse().with_context(|| format!("parsing {a:?}"))?;
    let b: Polygon = b.parse().with_context(|| format!("parsing {b:?}"))?;
    tracing::info!(a = %a, b = %b, "compare");
    println!("{a} == {b}: {}", a.try_eq(&b)?);
    println!("{a} > {b}: {}", a.try_gt(&b)?);
    println!("{a} < {b}: {}", a.try_lt(&b)?);
    Ok(())
}

fn table(
    sides_min: u32,
    sides_max: u32,
    circumradius: f64,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(sides_min, sides_max, circumradius, tag = ?tag, "table");
    if sides_min > sides_max {
        bail!("sides_min ({sides_min}) must not exceed sides_max ({sides_max})");
    }
    let polys = (sides_min..=sides_max)
        .map(|n| Polygon::new(n, circumradius))
        .collect::<Result<Vec<_>, _>>()?;
    let mut df = to_frame(&polys)?;
    write_frame(&mut df, &out)?;
    let payload = Payload::new(
        "table",
        serde_json::json!({
            "sides_min": sides_min,
            "sides_max": sides_max,
            "circumradius": circumradius
        }),
    )
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn batch(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "batch");
    let (polys, rejected) = read_pairs(&input)?;
    let mut df = to_frame(&polys)?;
    write_frame(&mut df, &out)?;
    let payload = Payload::new(
        "batch",
        serde_json::json!({
            "input": input.to_string_lossy(),
            "accepted": polys.len(),
            "rejected_rows": rejected.iter().map(|r| r.row).collect::<Vec<_>>()
        }),
    )
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn sample(cfg: SampleCfg, count: usize, seed: u64, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(count, seed, cfg = ?cfg, tag = ?tag, "sample");
    if let SideCount::Uniform { min, max } = cfg.sides {
        if min > max {
            bail!("sides_min ({min}) must not exceed sides_max ({max})");
        }
    }
    let polys: Vec<Polygon> = PolygonSampler::new(cfg, seed)?
        .take(count)
        .map(|(_, p)| p)
        .collect();
    let mut df = to_frame(&polys)?;
    write_frame(&mut df, &out)?;
    let payload = Payload::new(
        "sample",
        serde_json::json!({
            "count": count,
            "seed": seed,
            "radius_min": cfg.radius_min,
            "radius_max": cfg.radius_max
        }),
    )
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "regpoly_version": regpoly::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
