use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use orthovec::{
    Conversion, ConvertConfig, Dispatch, Image, RegionReport, Rgba, convert_with_report,
    path_data_area,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ORTHOVEC_LOG";

#[derive(Parser, Debug)]
#[command(name = "orthovec", version, disable_version_flag = true)]
#[command(about = "Convert a raster image into pixel-exact orthogonal SVG paths")]
struct Cli {
    /// Input image (png, gif, bmp, jpeg); stdin when absent
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output SVG; stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Worker threads (default: one per core)
    #[arg(long, conflicts_with = "sequential")]
    threads: Option<usize>,
    /// Process colors one after another on the main thread
    #[arg(long)]
    sequential: bool,
    /// Keep loops that touch at a single point as separate polygons
    #[arg(long)]
    no_consolidate: bool,
    /// Write a JSON report of per-color statistics
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Re-parse every emitted path and check its area against the pixel count
    #[arg(long)]
    verify: bool,
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),
}

#[derive(Debug, Serialize)]
struct Stats<'a> {
    width: usize,
    height: usize,
    elapsed_ms: f64,
    svg_bytes: usize,
    regions: &'a [RegionReport],
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let bytes = read_input(cli.input.as_deref())?;
    let img = decode_rgba(&bytes)?;
    tracing::info!(width = img.width(), height = img.height(), "decoded input");

    let cfg = ConvertConfig {
        dispatch: if cli.sequential {
            Dispatch::Sequential
        } else {
            Dispatch::Parallel {
                threads: cli.threads,
            }
        },
        consolidate: !cli.no_consolidate,
    };

    let t0 = Instant::now();
    let conv = convert_with_report(&img, &cfg).context("converting image")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(colors = conv.regions.len(), bytes = conv.svg.len(), elapsed_ms, "converted");

    if cli.verify {
        verify(&conv)?;
    }

    if let Some(path) = cli.stats {
        let stats = Stats {
            width: img.width(),
            height: img.height(),
            elapsed_ms,
            svg_bytes: conv.svg.len(),
            regions: &conv.regions,
        };
        write_json(path, &stats)?;
    }

    write_output(cli.output.as_deref(), &conv.svg)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading image from stdin")?;
            Ok(buf)
        }
    }
}

fn decode_rgba(bytes: &[u8]) -> Result<Image<Rgba>> {
    let rgba = image::load_from_memory(bytes)
        .context("decoding image")?
        .into_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let pixels = rgba.pixels().map(|p| Rgba::from_array(p.0)).collect();
    Image::from_vec(width, height, pixels).context("building pixel grid")
}

/// `d` attribute values in document order.
fn path_data_attrs(svg: &str) -> Vec<&str> {
    svg.split(" d=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(d, _)| d))
        .collect()
}

fn verify(conv: &Conversion) -> Result<()> {
    let paths = path_data_attrs(&conv.svg);
    if paths.len() != conv.regions.len() {
        bail!(
            "document has {} paths for {} colors",
            paths.len(),
            conv.regions.len()
        );
    }

    for (d, region) in paths.iter().zip(&conv.regions) {
        let area = path_data_area(d).with_context(|| format!("parsing path for {}", region.color))?;
        if area != region.pixels as i64 {
            bail!(
                "area mismatch for {}: path covers {area}, color has {} pixels",
                region.color,
                region.pixels
            );
        }
    }

    tracing::info!(paths = paths.len(), "verified path areas");
    Ok(())
}

fn write_output(path: Option<&Path>, svg: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, svg).with_context(|| format!("writing {}", path.display())),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(svg.as_bytes()).context("writing svg to stdout")?;
            out.flush().context("flushing stdout")
        }
    }
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}
