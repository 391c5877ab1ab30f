//! Pixel-exact conversion of raster images into orthogonal SVG paths.
//!
//! Every color of the input becomes one `<path>` whose polygons cover exactly
//! that color's pixels under nonzero filling. Colors are processed as
//! independent tasks and written in the order they are first seen when
//! scanning columns left to right.
//!
//! ```
//! use orthovec::{ConvertConfig, Image, Rgba, convert};
//!
//! let img = Image::new_fill(2, 2, Rgba::opaque(0, 128, 0));
//! let svg = convert(&img, &ConvertConfig::default()).expect("converts");
//! assert!(svg.contains(r#"d="M0,0h2v2h-2z""#));
//! ```

pub mod dispatch;
pub mod timing;

pub use dispatch::{
    Conversion, ConvertConfig, ConvertError, Dispatch, RegionReport, convert, convert_with_report,
};
pub use ov_contour::*;
pub use ov_core::*;
pub use ov_svg::*;
