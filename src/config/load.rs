use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{CompressConfig, FramekitConfig};
use crate::cli::CompressionLevel;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: FramekitConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: FramekitConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the sequence file relative to the config file directory.
    pub fn resolve_input(&self) -> Option<PathBuf> {
        self.config
            .input
            .as_ref()
            .map(|input| self.config_dir.join(input))
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }

    /// Compression level from the config, validated like the CLI flag.
    pub fn compression(&self) -> Result<Option<CompressionLevel>> {
        match &self.config.compress {
            None => Ok(None),
            Some(CompressConfig::Level(n)) => n
                .to_string()
                .parse()
                .map(Some)
                .map_err(|e: String| anyhow::anyhow!("{} in config file", e)),
            Some(CompressConfig::Max(s)) => s
                .parse()
                .map(Some)
                .map_err(|e: String| anyhow::anyhow!("{} in config file", e)),
        }
    }
}
