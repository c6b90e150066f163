pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod geometry;

pub use cli::{CliArgs, Command, CommonArgs, CompressionLevel, ExportMode};
pub use error::FramekitError;
pub use export::{
    Manifest, ManifestEntry, RenderedFrame, export, export_equal, export_trimmed, write_export,
};
pub use frame::Frame;
pub use geometry::{GlobalBounds, calculate_global_bounds};
