//! BMP output

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::error::Result;

/// Encode a grayscale image as BMP
///
/// The BMP encoder writes single-channel images as 8-bit paletted data with
/// a gray ramp, so decoders see equal R, G and B values and no alpha.
pub fn encode_bmp(image: &GrayImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Bmp)?;
    Ok(cursor.into_inner())
}

/// Write a grayscale image to `path` as BMP, replacing any existing file
///
/// Encoding happens in memory first, so a failed encode never leaves a
/// partial file behind.
pub fn save_bmp(image: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = encode_bmp(image)?;
    fs::write(path, &data)?;

    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn sample() -> GrayImage {
        GrayImage::from_fn(5, 3, |x, y| Luma([(x * 40 + y * 7) as u8]))
    }

    #[test]
    fn test_encode_bmp_header() {
        let data = encode_bmp(&sample()).unwrap();
        assert_eq!(&data[..2], b"BM");
    }

    #[test]
    fn test_save_bmp_decodes_as_opaque_gray() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chip.bmp");
        save_bmp(&sample(), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert!(!decoded.color().has_alpha());
        assert_eq!((decoded.width(), decoded.height()), (5, 3));

        let rgb = decoded.to_rgb8();
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let expected = (x * 40 + y * 7) as u8;
            assert_eq!(pixel.0, [expected, expected, expected], "at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_save_bmp_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chip.bmp");
        fs::write(&path, vec![0u8; 64 * 1024]).unwrap();

        save_bmp(&sample(), &path).unwrap();
        let expected = encode_bmp(&sample()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_save_bmp_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chip.bmp");
        assert!(matches!(
            save_bmp(&sample(), &path),
            Err(crate::ImageError::Io(_))
        ));
    }
}
