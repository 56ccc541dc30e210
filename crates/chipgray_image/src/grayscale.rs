//! Root-mean-square grayscale conversion
//!
//! Luminance is `sqrt((r² + g² + b²) / 3)` over channels normalized to
//! `[0, 1]`, rather than a weighted Rec. 601/709 sum.

use image::{GrayImage, Luma, RgbImage};

/// RMS luminance of one 8-bit RGB pixel
pub fn rms_luma(r: u8, g: u8, b: u8) -> u8 {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let luma = ((r * r + g * g + b * b) / 3.0).sqrt();
    (luma * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB image to single-channel RMS grayscale
pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    let (width, height) = rgb.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([rms_luma(r, g, b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_gray_inputs_are_fixed_points() {
        for v in [0u8, 1, 127, 128, 0xee, 255] {
            assert_eq!(rms_luma(v, v, v), v);
        }
    }

    #[test]
    fn test_primaries() {
        // 255 * sqrt(1/3) = 147.22
        assert_eq!(rms_luma(255, 0, 0), 147);
        assert_eq!(rms_luma(0, 255, 0), 147);
        assert_eq!(rms_luma(0, 0, 255), 147);
        // 255 * sqrt(2/3) = 208.21
        assert_eq!(rms_luma(255, 255, 0), 208);
    }

    #[test]
    fn test_matches_integer_formula() {
        for (r, g, b) in [(12u8, 200u8, 99u8), (250, 3, 77), (1, 2, 3), (64, 128, 192)] {
            let sum = r as f64 * r as f64 + g as f64 * g as f64 + b as f64 * b as f64;
            let expected = (sum / 3.0).sqrt().round() as u8;
            assert_eq!(rms_luma(r, g, b), expected, "rgb({}, {}, {})", r, g, b);
        }
    }

    #[test]
    fn test_rms_differs_from_weighted_luma() {
        // Rec. 601 would give 0.587 * 255 = 150 for pure green
        assert_ne!(rms_luma(0, 255, 0), 150);
    }

    #[test]
    fn test_to_grayscale() {
        let mut rgb = RgbImage::from_pixel(3, 2, Rgb([0xee, 0xee, 0xee]));
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(2, 1, Rgb([0, 0, 0]));

        let gray = to_grayscale(&rgb);
        assert_eq!(gray.dimensions(), (3, 2));
        assert_eq!(gray.get_pixel(0, 0).0, [147]);
        assert_eq!(gray.get_pixel(1, 0).0, [0xee]);
        assert_eq!(gray.get_pixel(2, 1).0, [0]);
    }
}
