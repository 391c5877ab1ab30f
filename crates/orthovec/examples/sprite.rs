//! Example: vectorize a synthetic sprite sheet.
//!
//! Builds a tiled sprite with rings, holes and diagonal pinches, converts it
//! once per dispatch mode, and writes the SVG plus a JSON summary of every
//! color region. Timing for each run is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p orthovec --example sprite -- --help
//!   cargo run -p orthovec --example sprite -- --tiles 16

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use orthovec::{ConvertConfig, Dispatch, Image, RegionReport, Rgba, convert_with_report};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Convert a synthetic sprite sheet into orthogonal SVG paths")]
struct Args {
    /// Tiles per side; every tile is 8x8 pixels
    #[arg(long, default_value_t = 8)]
    tiles: usize,

    /// Worker threads for the parallel run (default: rayon's global pool)
    #[arg(long)]
    threads: Option<usize>,

    /// Keep loops that touch at a single point as separate polygons
    #[arg(long)]
    no_consolidate: bool,

    /// Output SVG path
    #[arg(long, default_value = "sprite.svg")]
    out: String,

    /// Output JSON summary path (default: <out stem>_summary.json)
    #[arg(long)]
    summary: Option<String>,
}

#[derive(Serialize)]
struct RunSummary {
    mode: &'static str,
    elapsed_ms: f64,
    svg_bytes: usize,
}

#[derive(Serialize)]
struct Summary {
    width: usize,
    height: usize,
    runs: Vec<RunSummary>,
    regions: Vec<RegionReport>,
}

const PALETTE: [Rgba; 4] = [
    Rgba::opaque(250, 246, 230),
    Rgba::opaque(40, 40, 48),
    Rgba::opaque(214, 80, 64),
    Rgba::opaque(72, 160, 96),
];

fn sprite(tiles: usize) -> Image<Rgba> {
    let side = tiles * 8;
    Image::from_fn(side, side, |x, y| {
        let (tx, ty) = (x % 8, y % 8);
        let tile = x / 8 + y / 8;
        let border = (1..7).contains(&tx) && (1..7).contains(&ty);
        let hole = (3..5).contains(&tx) && (3..5).contains(&ty);
        let ring = border && !hole;
        let pinch = tx == ty && tile % 2 == 0;
        if ring {
            PALETTE[1 + tile % 3]
        } else if pinch {
            PALETTE[1]
        } else {
            PALETTE[0]
        }
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.tiles == 0 {
        bail!("--tiles must be > 0");
    }

    let summary_path = args.summary.clone().unwrap_or_else(|| {
        let p = std::path::Path::new(&args.out);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_summary.json"))
            .to_string_lossy()
            .into_owned()
    });

    let img = sprite(args.tiles);
    println!("sprite: {}x{} pixels", img.width(), img.height());

    let modes = [
        ("parallel", Dispatch::Parallel { threads: args.threads }),
        ("sequential", Dispatch::Sequential),
    ];

    let mut runs = Vec::with_capacity(modes.len());
    let mut last = None;
    for (mode, dispatch) in modes {
        let cfg = ConvertConfig {
            dispatch,
            consolidate: !args.no_consolidate,
        };

        let t0 = Instant::now();
        let conv = convert_with_report(&img, &cfg).with_context(|| format!("{mode} conversion"))?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
        println!(
            "  {mode:>10}: {} colors, {} bytes  ({elapsed_ms:.2} ms)",
            conv.regions.len(),
            conv.svg.len()
        );

        if let Some(prev) = &last {
            if prev != &conv {
                bail!("{mode} output differs from the previous run");
            }
        }
        runs.push(RunSummary {
            mode,
            elapsed_ms,
            svg_bytes: conv.svg.len(),
        });
        last = Some(conv);
    }

    let Some(conv) = last else {
        bail!("no conversion ran");
    };

    std::fs::write(&args.out, &conv.svg).with_context(|| format!("writing {}", args.out))?;

    let summary = Summary {
        width: img.width(),
        height: img.height(),
        runs,
        regions: conv.regions,
    };
    let out_file =
        std::fs::File::create(&summary_path).with_context(|| format!("creating {summary_path}"))?;
    serde_json::to_writer_pretty(out_file, &summary)
        .with_context(|| format!("writing JSON to {summary_path}"))?;

    println!("svg written to {}, summary to {summary_path}", args.out);
    Ok(())
}
