//! Output formats.
//!
//! - `svg` - SVG documents for figures

pub(crate) mod svg;
