//! Chip SVG document type and the unstyled path edit

use std::fs;
use std::ops::Range;
use std::path::Path as FilePath;

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use crate::error::SvgError;

/// A chip SVG held as XML source text
///
/// Edits are applied directly to the source, so everything outside an
/// edited element serializes back byte for byte.
#[derive(Clone, Debug)]
pub struct ChipDocument {
    source: String,
}

/// A `path` element removed by [`ChipDocument::strip_unstyled_path`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrippedPath {
    /// The element's `id` attribute, if it had one
    pub id: Option<String>,
    /// Byte range the element occupied in the source before removal
    pub range: Range<usize>,
}

impl ChipDocument {
    /// Load a chip document from a file
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, SvgError> {
        let source = fs::read_to_string(path)?;
        Self::from_string(source)
    }

    /// Load a chip document from a string
    pub fn from_str(svg_str: &str) -> Result<Self, SvgError> {
        Self::from_string(svg_str.to_owned())
    }

    fn from_string(source: String) -> Result<Self, SvgError> {
        // Reject malformed XML up front rather than on first edit
        Document::parse_with_options(&source, parsing_options())?;
        Ok(Self { source })
    }

    /// Remove the first `path` of the first `g` element that has no `style`
    /// attribute
    ///
    /// Every `path` below the first `g` is searched in document order, and
    /// at most one element is removed per call. The match must be a direct
    /// child of that `g`; a nested match is a [`SvgError::NestedPath`] error
    /// and leaves the document untouched. Returns `Ok(None)` when every
    /// `path` is styled.
    pub fn strip_unstyled_path(&mut self) -> Result<Option<StrippedPath>, SvgError> {
        let stripped = {
            let doc = Document::parse_with_options(&self.source, parsing_options())?;
            let group = doc
                .descendants()
                .find(|node| is_element_named(node, "g"))
                .ok_or(SvgError::MissingGroup)?;

            let target = group
                .descendants()
                .filter(|node| is_element_named(node, "path"))
                .find(|node| !node.has_attribute("style"));

            match target {
                Some(node) if node.parent() != Some(group) => {
                    return Err(SvgError::NestedPath {
                        id: node.attribute("id").map(str::to_owned),
                    });
                }
                Some(node) => Some(StrippedPath {
                    id: node.attribute("id").map(str::to_owned),
                    range: node.range(),
                }),
                None => None,
            }
        };

        if let Some(ref path) = stripped {
            debug!(id = ?path.id, range = ?path.range, "removing unstyled path");
            self.source.replace_range(path.range.clone(), "");
        }

        Ok(stripped)
    }

    /// The current serialization of the document
    pub fn to_svg_string(&self) -> &str {
        &self.source
    }

    /// Consume the document, returning its UTF-8 serialization
    pub fn into_bytes(self) -> Vec<u8> {
        self.source.into_bytes()
    }
}

/// SVG files routinely carry a DOCTYPE, which roxmltree rejects by default
fn parsing_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

fn is_element_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
