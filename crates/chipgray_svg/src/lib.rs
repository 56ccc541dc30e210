//! Chip SVG loading and rasterization for chipgray
//!
//! This crate loads a chip SVG, removes its unstyled overlay path and
//! rasterizes the result onto an opaque background. It uses `roxmltree` for
//! the document edit and `usvg`/`resvg` for rendering.
//!
//! # Example
//!
//! ```ignore
//! use chipgray_svg::{ChipDocument, RasterOptions, RasterizedChip};
//!
//! let mut doc = ChipDocument::from_file("chip.svg")?;
//! doc.strip_unstyled_path()?;
//! let raster = RasterizedChip::from_data(&doc.into_bytes(), &RasterOptions::default())?;
//! ```

mod document;
mod error;
mod rasterize;

pub use document::{ChipDocument, StrippedPath};
pub use error::SvgError;
pub use rasterize::{Background, RasterOptions, RasterizedChip};
