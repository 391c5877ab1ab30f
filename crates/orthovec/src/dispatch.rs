use ov_contour::{Polygon, ResolveConfig, ResolveError, collect_edges, resolve_boundaries};
use ov_core::{ColorKey, Edge, PixelGrid};
use ov_svg::{SvgError, path_element, write_document};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::timing::timed;

/// How per-color work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One rayon task per color. `threads: Some(n)` builds a pool for this
    /// call only; `None` runs on the global pool.
    Parallel { threads: Option<usize> },
    /// Colors processed one after another on the calling thread.
    Sequential,
}

impl Default for Dispatch {
    fn default() -> Self {
        Self::Parallel { threads: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub dispatch: Dispatch,
    /// Merge loops of one color that touch at a lattice point.
    pub consolidate: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dispatch: Dispatch::default(),
            consolidate: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("resolving boundaries for {color}")]
    Resolve {
        color: ColorKey,
        #[source]
        source: ResolveError,
    },
    #[error("serializing path for {color}")]
    Serialize {
        color: ColorKey,
        #[source]
        source: SvgError,
    },
    #[error("building worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Statistics for one color's `<path>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    /// `#rrggbbaa`
    pub color: String,
    pub pixels: usize,
    pub polygons: usize,
    pub path_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub svg: String,
    /// One entry per color, in document order.
    pub regions: Vec<RegionReport>,
}

/// Converts `grid` into an SVG document with one filled path per color.
pub fn convert<G: PixelGrid + ?Sized>(
    grid: &G,
    cfg: &ConvertConfig,
) -> Result<String, ConvertError> {
    convert_with_report(grid, cfg).map(|c| c.svg)
}

/// Like [`convert`], also returning per-color statistics.
///
/// Paths appear in first-seen color order regardless of how tasks were
/// scheduled. The first failing color aborts the whole conversion.
pub fn convert_with_report<G: PixelGrid + ?Sized>(
    grid: &G,
    cfg: &ConvertConfig,
) -> Result<Conversion, ConvertError> {
    let edges = timed("collect", || collect_edges(grid));
    let (width, height) = (edges.width(), edges.height());
    let groups = edges.into_groups();
    let resolve_cfg = ResolveConfig {
        consolidate: cfg.consolidate,
    };

    tracing::debug!(width, height, colors = groups.len(), dispatch = ?cfg.dispatch, "converting");

    let regions = timed("regions", || -> Result<Vec<(String, RegionReport)>, ConvertError> {
        match cfg.dispatch {
            Dispatch::Sequential => groups
                .into_iter()
                .map(|(color, edges)| region(color, edges, &resolve_cfg))
                .collect(),
            Dispatch::Parallel { threads: None } => run_parallel(groups, &resolve_cfg),
            Dispatch::Parallel { threads: Some(n) } => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| run_parallel(groups, &resolve_cfg))
            }
        }
    })?;

    let (elements, reports): (Vec<String>, Vec<RegionReport>) = regions.into_iter().unzip();
    let svg = write_document(width, height, &elements);

    Ok(Conversion {
        svg,
        regions: reports,
    })
}

fn run_parallel(
    groups: Vec<(ColorKey, Vec<Edge>)>,
    cfg: &ResolveConfig,
) -> Result<Vec<(String, RegionReport)>, ConvertError> {
    groups
        .into_par_iter()
        .map(|(color, edges)| region(color, edges, cfg))
        .collect()
}

fn region(
    color: ColorKey,
    edges: Vec<Edge>,
    cfg: &ResolveConfig,
) -> Result<(String, RegionReport), ConvertError> {
    let span = tracing::debug_span!("region", %color, edges = edges.len());
    let _enter = span.enter();

    let pixels = edges.len() / 4;
    let polygons: Vec<Polygon> =
        resolve_boundaries(edges, cfg).map_err(|source| ConvertError::Resolve { color, source })?;
    let element =
        path_element(color, &polygons).map_err(|source| ConvertError::Serialize { color, source })?;

    tracing::debug!(pixels, polygons = polygons.len(), bytes = element.len(), "region done");

    let report = RegionReport {
        color: color.to_hex(),
        pixels,
        polygons: polygons.len(),
        path_bytes: element.len(),
    };
    Ok((element, report))
}
