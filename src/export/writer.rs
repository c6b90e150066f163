use std::fs;
use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use super::{Manifest, RenderedFrame, check_preview, encode_png, write_manifest, write_preview_gif};
use crate::cli::CompressionLevel;
use crate::error::FramekitError;

/// Encode and write each rendered frame as `<id>.png` into `frame_dir`.
///
/// Frames are written one at a time in order. The first failure aborts the
/// export; no manifest is returned for a partial write.
pub fn write_frames(
    rendered: &[RenderedFrame],
    frame_dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    for frame in rendered {
        let png_data = encode_png(&frame.id, &frame.canvas, compress)?;

        let path = frame_dir.join(format!("{}.png", frame.id));
        fs::write(&path, png_data).map_err(|e| FramekitError::OutputWrite {
            path: path.clone(),
            source: e,
        })?;

        debug!(
            "Wrote {} ({}x{})",
            path.display(),
            frame.canvas.width(),
            frame.canvas.height()
        );

        manifest.insert(frame.id.clone(), frame.entry);
    }

    Ok(manifest)
}

/// Create `dir` and any missing parents.
pub fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| FramekitError::OutputWrite {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Write a rendered export into `output_dir`: one PNG per frame, then
/// `<name>.json`, then `<name>.gif` when `preview` is set.
///
/// A preview that cannot be built is rejected before the directory is
/// created or any file is written.
pub fn write_export(
    rendered: &[RenderedFrame],
    output_dir: &Path,
    name: &str,
    compress: Option<CompressionLevel>,
    preview: bool,
) -> Result<Manifest> {
    if preview {
        check_preview(rendered)?;
    }

    create_output_dir(output_dir)?;

    let manifest = write_frames(rendered, output_dir, compress)?;

    write_manifest(&manifest, output_dir, name)?;
    info!("Generated {}.json", name);

    if preview {
        write_preview_gif(rendered, &output_dir.join(format!("{}.gif", name)))?;
    }

    Ok(manifest)
}
