use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramekitError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode frame '{id}' as PNG: {source}")]
    ImageSave {
        id: String,
        source: image::ImageError,
    },

    #[error("Failed to encode preview '{path}': {source}")]
    PreviewEncode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("PNG encoding of frame '{0}' produced no data")]
    EmptyEncoding(String),

    #[error("Failed to compress PNG for frame '{id}': {message}")]
    PngCompress { id: String, message: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Bounds could not be computed: no frame has a valid image")]
    NoValidFrames,

    #[error("Canvas of {width}x{height} exceeds the maximum of {max}x{max} pixels")]
    CanvasTooLarge { width: u64, height: u64, max: u32 },

    #[error("Anchor offset ({x}, {y}) of frame '{id}' does not fit in the manifest")]
    OffsetOverflow { id: String, x: i64, y: i64 },

    #[error("Sequence contains no frames")]
    NoFrames,

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to parse sequence file '{path}': {source}")]
    SequenceParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate frame id '{0}'")]
    DuplicateFrameId(String),

    #[error("Invalid frame id '{0}': ids must be non-empty and contain no path separators")]
    InvalidFrameId(String),

    #[error(
        "Frame '{id}' is {width}x{height}, expected {expected_width}x{expected_height} for an animated preview"
    )]
    FrameSizeMismatch {
        id: String,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}
