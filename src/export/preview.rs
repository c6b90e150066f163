use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame};
use log::info;

use super::RenderedFrame;
use crate::error::FramekitError;

/// Check that the rendered canvases can form a preview: at least one frame,
/// and every canvas the same size as the first.
///
/// The equal layout always passes; trimmed canvases pass only when every
/// frame pads to the same size.
pub fn check_preview(rendered: &[RenderedFrame]) -> Result<()> {
    let first = rendered.first().ok_or(FramekitError::NoValidFrames)?;
    let (width, height) = first.canvas.dimensions();

    if let Some(odd) = rendered
        .iter()
        .find(|r| r.canvas.dimensions() != (width, height))
    {
        return Err(FramekitError::FrameSizeMismatch {
            id: odd.id.clone(),
            width: odd.canvas.width(),
            height: odd.canvas.height(),
            expected_width: width,
            expected_height: height,
        }
        .into());
    }

    Ok(())
}

/// Write the rendered canvases as a looping animated GIF.
///
/// Fails like [`check_preview`] before creating the file. Negative delays
/// are written as zero.
pub fn write_preview_gif(rendered: &[RenderedFrame], path: &Path) -> Result<()> {
    check_preview(rendered)?;

    let encode_err = |e| FramekitError::PreviewEncode {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(|e| FramekitError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite).map_err(encode_err)?;

    for frame in rendered {
        let delay_ms = u32::try_from(frame.entry.delay).unwrap_or(0);
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        encoder
            .encode_frame(GifFrame::from_parts(frame.canvas.clone(), 0, 0, delay))
            .map_err(encode_err)?;
    }

    info!("Wrote preview {} ({} frames)", path.display(), rendered.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{render_equal, render_trimmed};
    use crate::frame::Frame;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba, RgbaImage};
    use std::io::BufReader;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "framekit-preview-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_preview_from_equal_layout() {
        let dir = scratch_dir("equal");
        let frames = vec![
            Frame::new("0", RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])), 2, 2)
                .with_delay(100),
            Frame::new("1", RgbaImage::from_pixel(6, 2, Rgba([0, 255, 0, 255])), 3, 1)
                .with_delay(250),
        ];
        let rendered = render_equal(&frames).unwrap();
        let path = dir.join("preview.gif");

        write_preview_gif(&rendered, &path).unwrap();

        let reader = BufReader::new(File::open(&path).unwrap());
        let decoded = GifDecoder::new(reader)
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].buffer().dimensions(), (6, 4));
        assert_eq!(decoded[1].delay().numer_denom_ms(), (250, 1));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_preview_rejects_mixed_sizes() {
        let frames = vec![
            Frame::new("small", RgbaImage::new(2, 2), 0, 0),
            Frame::new("large", RgbaImage::new(4, 4), 0, 0),
        ];
        let rendered = render_trimmed(&frames).unwrap();

        let err = write_preview_gif(&rendered, Path::new("unused.gif")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FramekitError>(),
            Some(FramekitError::FrameSizeMismatch { id, .. }) if id == "large"
        ));
        assert!(!Path::new("unused.gif").exists());
    }

    #[test]
    fn test_check_preview() {
        let same = vec![
            Frame::new("a", RgbaImage::new(3, 3), 0, 0),
            Frame::new("b", RgbaImage::new(4, 4), 0, 0),
        ];
        // 3x3 and 4x4 both pad to 4x4
        check_preview(&render_trimmed(&same).unwrap()).unwrap();
        check_preview(&render_equal(&same).unwrap()).unwrap();

        let mixed = vec![
            Frame::new("a", RgbaImage::new(2, 2), 0, 0),
            Frame::new("b", RgbaImage::new(2, 6), 0, 0),
        ];
        let err = check_preview(&render_trimmed(&mixed).unwrap()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FramekitError>(),
            Some(FramekitError::FrameSizeMismatch { id, expected_height: 2, .. }) if id == "b"
        ));
    }

    #[test]
    fn test_preview_requires_frames() {
        let err = write_preview_gif(&[], Path::new("unused.gif")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FramekitError>(),
            Some(FramekitError::NoValidFrames)
        ));
    }
}
