use std::path::Path;

use anyhow::Result;
use image::{RgbaImage, imageops};

use super::{Manifest, ManifestEntry, RenderedFrame, manifest_offsets, write_frames};
use crate::cli::CompressionLevel;
use crate::frame::Frame;
use crate::geometry::even_canvas;

/// Render each frame on its own canvas, padded to even dimensions.
///
/// The raster is drawn at the canvas origin. Manifest offsets locate the
/// anchor relative to the canvas center, with x negated. Frames without a
/// valid raster are skipped.
pub fn render_trimmed(frames: &[Frame]) -> Result<Vec<RenderedFrame>> {
    frames
        .iter()
        .filter_map(|frame| frame.raster().map(|raster| (frame, raster)))
        .map(|(frame, raster)| -> Result<RenderedFrame> {
            let (target_w, target_h) =
                even_canvas(u64::from(raster.width()), u64::from(raster.height()))?;

            let mut canvas = RgbaImage::new(target_w, target_h);
            imageops::replace(&mut canvas, raster, 0, 0);

            Ok(RenderedFrame {
                id: frame.id.clone(),
                canvas,
                entry: trimmed_entry(frame, target_w, target_h)?,
            })
        })
        .collect()
}

fn trimmed_entry(frame: &Frame, target_w: u32, target_h: u32) -> Result<ManifestEntry> {
    // Both dimensions are even, so the center is a whole pixel
    let center_x = i64::from(target_w / 2);
    let center_y = i64::from(target_h / 2);
    let new_x = i64::from(frame.shift_left) - center_x;
    let new_y = i64::from(frame.shift_up) - center_y;

    let (x, y) = manifest_offsets(&frame.id, -new_x, new_y)?;

    Ok(ManifestEntry {
        x,
        y,
        delay: frame.delay,
        canvas_w: None,
        canvas_h: None,
    })
}

/// Export every valid frame on its own even-sized canvas into `frame_dir`.
///
/// Nothing is written when any frame fails to render.
pub fn export_trimmed(
    frames: &[Frame],
    frame_dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Manifest> {
    let rendered = render_trimmed(frames)?;
    write_frames(&rendered, frame_dir, compress)
}
