//! Per-color boundary extraction on the pixel lattice.
//!
//! Every pixel contributes its four sides as clockwise unit edges (color on
//! the right of travel, `y` down). For one color:
//! - Opposite edge pairs are shared borders and cancel out.
//! - The surviving edges form loops with in-degree equal to out-degree at
//!   every lattice point; they are traced into polygons whose straight runs
//!   are compacted into single segments.
//! - Loops that meet at a single lattice point (diagonal pinches, holes
//!   touching the outline) are spliced into one continuous path.
//!
//! Outer boundaries wind clockwise and holes counter-clockwise, so nonzero
//! filling of a color's polygons covers exactly that color's pixels.

mod edges;
mod polygon;
mod resolve;

pub use edges::{ColorEdges, collect_edges};
pub use polygon::{Polygon, PolygonDefect};
pub use resolve::{
    ResolveConfig, ResolveError, cancel_internal_edges, consolidate, resolve_boundaries,
    touching_points, trace_polygons,
};
