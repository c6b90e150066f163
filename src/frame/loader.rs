use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageReader, RgbaImage};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Deserialize;

use super::Frame;
use crate::error::FramekitError;

/// On-disk description of a frame sequence
#[derive(Debug, Deserialize)]
struct SequenceFile {
    frames: Vec<FrameSpec>,
}

#[derive(Debug, Deserialize)]
struct FrameSpec {
    id: String,
    /// Image path relative to the sequence file
    #[serde(default)]
    image: Option<PathBuf>,
    #[serde(default)]
    shift_left: i32,
    #[serde(default)]
    shift_up: i32,
    delay: i32,
}

/// Load a frame sequence file and decode the images it references.
///
/// Images are decoded in parallel; the returned frames keep the order of
/// the sequence file. A frame whose image is absent or cannot be decoded is
/// returned with `image: None` so the exporters skip it.
pub fn load_sequence(path: &Path) -> Result<Vec<Frame>> {
    if !path.exists() {
        return Err(FramekitError::InputNotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sequence file: {}", path.display()))?;
    let specs = parse_sequence(&content, path)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    info!("Loading {} frames...", specs.len());

    let frames: Vec<Frame> = specs
        .into_par_iter()
        .map(|spec| {
            let image = spec
                .image
                .as_ref()
                .and_then(|rel| decode_frame_image(&spec.id, &base_dir.join(rel)));

            if spec.image.is_none() {
                warn!("Frame '{}' has no image and will be skipped", spec.id);
            }

            Frame {
                id: spec.id,
                image,
                shift_left: spec.shift_left,
                shift_up: spec.shift_up,
                delay: spec.delay,
            }
        })
        .collect();

    Ok(frames)
}

fn parse_sequence(content: &str, path: &Path) -> Result<Vec<FrameSpec>> {
    let sequence: SequenceFile =
        serde_json::from_str(content).map_err(|e| FramekitError::SequenceParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if sequence.frames.is_empty() {
        return Err(FramekitError::NoFrames.into());
    }

    let mut seen = HashSet::new();
    for spec in &sequence.frames {
        if !is_valid_id(&spec.id) {
            return Err(FramekitError::InvalidFrameId(spec.id.clone()).into());
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(FramekitError::DuplicateFrameId(spec.id.clone()).into());
        }
    }

    Ok(sequence.frames)
}

/// Ids become file names, so they must not escape the output directory.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

fn decode_frame_image(id: &str, path: &Path) -> Option<RgbaImage> {
    let decoded = ImageReader::open(path)
        .map_err(|e| FramekitError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })
        .and_then(|reader| {
            reader.decode().map_err(|e| FramekitError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })
        });

    match decoded {
        Ok(img) => {
            debug!("Decoded frame '{}' ({}x{})", id, img.width(), img.height());
            Some(img.into_rgba8())
        }
        Err(e) => {
            warn!("Frame '{}' will be skipped: {}", id, e);
            None
        }
    }
}
