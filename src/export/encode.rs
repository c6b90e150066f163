use std::io::Cursor;

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::FramekitError;

/// Encode a canvas as PNG bytes, optionally recompressing with oxipng.
///
/// `id` names the frame in error messages. An empty canvas, or an encoder
/// that yields no bytes, is treated as a failure.
pub fn encode_png(
    id: &str,
    canvas: &RgbaImage,
    compress: Option<CompressionLevel>,
) -> Result<Vec<u8>> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(FramekitError::EmptyEncoding(id.to_string()).into());
    }

    let mut png_data = Cursor::new(Vec::new());
    canvas
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| FramekitError::ImageSave {
            id: id.to_string(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            FramekitError::PngCompress {
                id: id.to_string(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    if output_data.is_empty() {
        return Err(FramekitError::EmptyEncoding(id.to_string()).into());
    }

    Ok(output_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> RgbaImage {
        let mut img = RgbaImage::new(6, 4);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        img
    }

    #[test]
    fn test_encode_round_trips_pixels() {
        let bytes = encode_png("a", &sample(), None).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.get_pixel(2, 1), &Rgba([10, 20, 30, 255]));
        assert_eq!(decoded.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_encode_with_compression_is_lossless() {
        let bytes = encode_png("a", &sample(), Some(CompressionLevel::Level(1))).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_encode_empty_canvas_fails() {
        let err = encode_png("empty", &RgbaImage::new(0, 0), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FramekitError>(),
            Some(FramekitError::EmptyEncoding(id)) if id == "empty"
        ));
    }
}
