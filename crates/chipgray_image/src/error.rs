//! Image error types

use std::io;
use thiserror::Error;

/// Errors that can occur when encoding or writing an image
#[derive(Error, Debug)]
pub enum ImageError {
    /// IO error when writing the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The image could not be encoded
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImageError>;
