//! SVG output for orthogonal polygons.
//!
//! Path data uses a deliberately small grammar: `M<x>,<y>` once per polygon,
//! then relative `h<dx>` / `v<dy>` runs and a closing `z`. Coordinates are
//! plain integers. [`parse_path_data`] reads that grammar back, which is what
//! the area self-checks are built on.

mod document;
mod error;
mod parse;
mod path;

pub use document::{DOCUMENT_CLOSE, SVG_NAMESPACE, document_open, write_document};
pub use error::SvgError;
pub use parse::{parse_path_data, path_data_area};
pub use path::{path_data, path_element, write_path_data};
