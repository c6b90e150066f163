use std::path::Path;

use anyhow::Result;
use image::{RgbaImage, imageops};
use log::debug;

use super::{Manifest, ManifestEntry, RenderedFrame, manifest_offsets, write_frames};
use crate::cli::CompressionLevel;
use crate::error::FramekitError;
use crate::frame::Frame;
use crate::geometry::{GlobalBounds, calculate_global_bounds, even_canvas};

/// Render every frame onto a canvas sized to the global bounding box.
///
/// All canvases share one size and one anchor position, so every manifest
/// entry carries the same offsets and canvas size. Fails before rendering
/// anything when no frame has a valid raster.
pub fn render_equal(frames: &[Frame]) -> Result<Vec<RenderedFrame>> {
    let bounds = calculate_global_bounds(frames).ok_or(FramekitError::NoValidFrames)?;

    let (canvas_w, canvas_h) = even_canvas(bounds.width, bounds.height)?;

    debug!(
        "Global bounds: min=({}, {}) size={}x{} anchor=({}, {}) canvas={}x{}",
        bounds.min_x,
        bounds.min_y,
        bounds.width,
        bounds.height,
        bounds.anchor_x,
        bounds.anchor_y,
        canvas_w,
        canvas_h
    );

    let (x, y) = equal_offsets(&bounds, canvas_w, canvas_h);

    frames
        .iter()
        .filter_map(|frame| frame.raster().map(|raster| (frame, raster)))
        .map(|(frame, raster)| -> Result<RenderedFrame> {
            let (x, y) = manifest_offsets(&frame.id, x, y)?;
            let (draw_x, draw_y) = draw_position(frame, &bounds);

            let mut canvas = RgbaImage::new(canvas_w, canvas_h);
            imageops::replace(&mut canvas, raster, draw_x, draw_y);

            Ok(RenderedFrame {
                id: frame.id.clone(),
                canvas,
                entry: ManifestEntry {
                    x,
                    y,
                    delay: frame.delay,
                    canvas_w: Some(canvas_w),
                    canvas_h: Some(canvas_h),
                },
            })
        })
        .collect()
}

/// Frame's world-space top-left minus the bounding box's top-left
fn draw_position(frame: &Frame, bounds: &GlobalBounds) -> (i64, i64) {
    let draw_x = -i64::from(frame.shift_left) - bounds.min_x;
    let draw_y = -i64::from(frame.shift_up) - bounds.min_y;
    (draw_x, draw_y)
}

/// Anchor offsets from the shared canvas center, x negated
fn equal_offsets(bounds: &GlobalBounds, canvas_w: u32, canvas_h: u32) -> (i64, i64) {
    let half_w = i64::from(canvas_w / 2);
    let half_h = i64::from(canvas_h / 2);
    (-bounds.anchor_x + half_w, bounds.anchor_y - half_h)
}

/// Export every valid frame on one shared canvas size into `frame_dir`.
///
/// Nothing is written when the bounds cannot be computed or any frame
/// fails to render.
pub fn export_equal(
    frames: &[Frame],
    frame_dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Manifest> {
    let rendered = render_equal(frames)?;
    write_frames(&rendered, frame_dir, compress)
}
