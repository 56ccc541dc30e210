//! Chip SVG error types

use std::io;
use thiserror::Error;

/// Errors that can occur when loading, editing or rasterizing a chip SVG
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The source is not well-formed XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document has no `g` element to strip a path from
    #[error("document has no <g> element")]
    MissingGroup,

    /// The first unstyled `path` is not a direct child of the first `g`
    #[error("first unstyled <path> (id {id:?}) is nested below the first <g>")]
    NestedPath { id: Option<String> },

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// The SVG has no drawable area
    #[error("invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}
