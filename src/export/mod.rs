//! Frame export: canvas layout, PNG encoding and the offset manifest.
//!
//! Each layout is split into a pure render step, which composes canvases
//! and manifest entries in memory, and a write step shared by all layouts.

mod encode;
mod equal;
mod manifest;
mod preview;
mod trimmed;
mod writer;

use std::path::Path;

use anyhow::Result;
use image::RgbaImage;

use crate::cli::{CompressionLevel, ExportMode};
use crate::error::FramekitError;
use crate::frame::Frame;

pub use encode::encode_png;
pub use equal::{export_equal, render_equal};
pub use manifest::{Manifest, ManifestEntry, write_manifest};
pub use preview::{check_preview, write_preview_gif};
pub use trimmed::{export_trimmed, render_trimmed};
pub use writer::{create_output_dir, write_export, write_frames};

/// A composed canvas ready to be written as `<id>.png`
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub id: String,
    pub canvas: RgbaImage,
    pub entry: ManifestEntry,
}

/// Render frames with the given layout.
pub fn render(mode: ExportMode, frames: &[Frame]) -> Result<Vec<RenderedFrame>> {
    match mode {
        ExportMode::Trimmed => render_trimmed(frames),
        ExportMode::Equal => render_equal(frames),
    }
}

/// Render and write frames with the given layout, returning the manifest.
pub fn export(
    mode: ExportMode,
    frames: &[Frame],
    frame_dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Manifest> {
    match mode {
        ExportMode::Trimmed => export_trimmed(frames, frame_dir, compress),
        ExportMode::Equal => export_equal(frames, frame_dir, compress),
    }
}

/// Narrow world-space anchor offsets to the manifest's `i32` fields.
fn manifest_offsets(id: &str, x: i64, y: i64) -> Result<(i32, i32), FramekitError> {
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(FramekitError::OffsetOverflow {
            id: id.to_string(),
            x,
            y,
        }),
    }
}
