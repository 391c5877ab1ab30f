//! Foundational primitives for orthogonal raster vectorization.
//!
//! ## Pixel Grids
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! Anything that can answer `color(x, y)` for `x < width`, `y < height`
//! implements [`PixelGrid`].
//!
//! ## Lattice Coordinates
//! Geometry lives on pixel corners, not pixel centers: pixel `(x, y)` covers
//! the unit square between lattice points `(x, y)` and `(x + 1, y + 1)`, and
//! `y` grows downward.
//!
//! ## Color Keys
//! Channels are clamped to `[0, 255]` and keyed as `#rrggbbaa`.

mod color;
mod error;
mod geom;
mod grid;
mod image;

pub use color::{ColorKey, Rgba};
pub use error::Error;
pub use geom::{Axis, Edge, Point};
pub use grid::PixelGrid;
pub use image::{Image, ImageView};
