//! The chip conversion pipeline

use std::path::Path;

use anyhow::{Context, Result};
use chipgray_image::{save_bmp, to_grayscale};
use chipgray_svg::{ChipDocument, RasterOptions, RasterizedChip};
use tracing::{debug, info};

/// Convert the chip SVG at `input` into a grayscale BMP at `output`
///
/// The first unstyled `path` of the first `g` element is removed, the rest is
/// rendered onto `options.background` and reduced to RMS grayscale. If that
/// `path` is nested deeper than a direct child of the `g`, nothing is written.
/// `output` is only written once every earlier step has succeeded.
pub fn convert(input: &Path, output: &Path, options: &RasterOptions) -> Result<()> {
    let mut document = ChipDocument::from_file(input)
        .with_context(|| format!("failed to load {}", input.display()))?;

    match document
        .strip_unstyled_path()
        .with_context(|| format!("failed to edit {}", input.display()))?
    {
        Some(stripped) => debug!(id = ?stripped.id, "stripped unstyled path"),
        None => info!("every path in the first group is styled, rendering unchanged"),
    }

    // The raster is dropped as soon as the grayscale copy exists
    let gray = {
        let raster = RasterizedChip::from_data(&document.into_bytes(), options)
            .with_context(|| format!("failed to rasterize {}", input.display()))?;
        to_grayscale(&raster.into_rgb_image())
    };

    save_bmp(&gray, output).with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "Wrote {}x{} grayscale BMP to {}",
        gray.width(),
        gray.height(),
        output.display()
    );
    Ok(())
}
