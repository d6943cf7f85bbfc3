use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::CompressionError;

/// Longest side of an uploaded review photo, in pixels.
pub const MAX_DIMENSION: u32 = 1280;
pub const JPEG_QUALITY: u8 = 80;

/// Shrinks photos before they are uploaded.
pub trait ImageCompressor {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

/// Downscales to [`MAX_DIMENSION`] and re-encodes as JPEG.
#[derive(Debug, Clone, Copy)]
pub struct JpegCompressor {
    pub max_dimension: u32,
    pub quality: u8,
}

impl Default for JpegCompressor {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            quality: JPEG_QUALITY,
        }
    }
}

fn calculate_dimensions(max: u32, actual: (u32, u32)) -> (u32, u32) {
    let scale = f32::min(max as f32 / actual.0 as f32, max as f32 / actual.1 as f32).min(1.0);
    let nw = (actual.0 as f32 * scale).round() as u32;
    let nh = (actual.1 as f32 * scale).round() as u32;
    (nw.max(1), nh.max(1))
}

impl ImageCompressor for JpegCompressor {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let img = image::load_from_memory(bytes).map_err(CompressionError::Decode)?;
        let actual = (img.width(), img.height());
        let (width, height) = calculate_dimensions(self.max_dimension, actual);
        let img = if (width, height) == actual {
            img
        } else {
            img.resize_exact(width, height, FilterType::Triangle)
        };

        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let mut out = Vec::with_capacity(bytes.len() / 2);
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, self.quality))
            .map_err(CompressionError::Encode)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([180, 40, 90, 128]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_calculate_dimensions() {
        assert_eq!(calculate_dimensions(1280, (2560, 1280)), (1280, 640));
        assert_eq!(calculate_dimensions(1280, (1000, 4000)), (320, 1280));
        // never upscaled
        assert_eq!(calculate_dimensions(1280, (640, 480)), (640, 480));
        assert_eq!(calculate_dimensions(10, (10000, 1)), (10, 1));
    }

    #[test]
    fn test_large_png_becomes_bounded_jpeg() {
        let compressed = JpegCompressor::default().compress(&png_bytes(2000, 1000)).unwrap();
        assert_eq!(image::guess_format(&compressed).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&compressed).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1280, 640));
    }

    #[test]
    fn test_small_image_keeps_size() {
        let compressed = JpegCompressor::default().compress(&png_bytes(64, 48)).unwrap();
        let decoded = image::load_from_memory(&compressed).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = JpegCompressor::default().compress(b"definitely not an image");
        assert!(matches!(result, Err(CompressionError::Decode(_))));
    }
}
