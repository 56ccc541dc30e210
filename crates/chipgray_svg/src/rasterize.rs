//! SVG rasterization onto an opaque background using resvg
//!
//! The canvas is filled with the background color before the SVG is drawn,
//! so transparent and partially covered pixels are composited onto it and
//! the resulting image carries no alpha channel.

use std::sync::Arc;

use image::{Rgb, RgbImage};
use tiny_skia::{Color, Pixmap, Transform};
use tracing::debug;
use usvg::{Options, Tree};

use crate::error::SvgError;

/// An opaque sRGB background color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Background {
    /// The light gray chips are flattened onto, `#eeeeee`
    pub const CHIP_GRAY: Background = Background::rgb(0xee, 0xee, 0xee);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_color(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::CHIP_GRAY
    }
}

/// How an SVG is turned into pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Color composited under the whole image
    pub background: Background,
    /// Pixels per SVG user unit
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: Background::CHIP_GRAY,
            scale: 1.0,
        }
    }
}

/// A rasterized chip with alpha flattened away
pub struct RasterizedChip {
    image: RgbImage,
}

impl RasterizedChip {
    /// Rasterize an SVG string
    pub fn from_str(svg_str: &str, options: &RasterOptions) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes(), options)
    }

    /// Rasterize SVG data at its intrinsic size times `options.scale`
    pub fn from_data(data: &[u8], options: &RasterOptions) -> Result<Self, SvgError> {
        let tree = Tree::from_data(data, &svg_options())
            .map_err(|e| SvgError::Parse(e.to_string()))?;

        Self::from_tree(&tree, options)
    }

    /// Rasterize a parsed usvg Tree
    pub fn from_tree(tree: &Tree, options: &RasterOptions) -> Result<Self, SvgError> {
        let size = tree.size();
        let width = (size.width() * options.scale).ceil() as u32;
        let height = (size.height() * options.scale).ceil() as u32;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(SvgError::InvalidSize { width, height })?;
        pixmap.fill(options.background.to_color());

        debug!(width, height, scale = options.scale, "rendering svg");
        let transform = Transform::from_scale(options.scale, options.scale);
        resvg::render(tree, transform, &mut pixmap.as_mut());

        // Every pixel is opaque after compositing onto the background, so
        // demultiplying is exact and alpha can be dropped.
        let pixels = pixmap.pixels();
        let image = RgbImage::from_fn(width, height, |x, y| {
            let color = pixels[(y * width + x) as usize].demultiply();
            Rgb([color.red(), color.green(), color.blue()])
        });

        Ok(Self { image })
    }

    /// Get the dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Get the RGB value of a pixel
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Borrow the flattened image
    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the raster, returning the flattened image
    pub fn into_rgb_image(self) -> RgbImage {
        self.image
    }
}

/// Parser options with the system fonts loaded, so `<text>` is rendered
fn svg_options() -> Options<'static> {
    let mut options = Options::default();
    Arc::make_mut(&mut options.fontdb).load_system_fonts();
    debug!(faces = options.fontdb.len(), "loaded system fonts");
    options
}
