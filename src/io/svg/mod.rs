//! SVG writing operations for figure export.

mod color;
mod path;
mod proj;
mod writer;

pub(crate) use color::*;
pub(crate) use path::*;
pub(crate) use proj::*;
pub(crate) use writer::*;
