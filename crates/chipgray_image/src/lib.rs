//! Grayscale conversion and BMP output for chipgray

mod encode;
mod error;
mod grayscale;

pub use encode::{encode_bmp, save_bmp};
pub use error::{ImageError, Result};
pub use grayscale::{rms_luma, to_grayscale};
