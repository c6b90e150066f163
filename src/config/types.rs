use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Framekit configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramekitConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Frame sequence file
    pub input: Option<String>,
    /// Output directory for frame images and the manifest
    pub output_dir: String,
    /// Base name of the manifest (and preview) files
    pub name: String,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Write an animated GIF preview next to the manifest
    pub preview: bool,
}

impl Default for FramekitConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output_dir: ".".to_string(),
            name: "manifest".to_string(),
            compress: None,
            preview: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FramekitConfig = serde_json::from_str(r#"{"input": "seq.json"}"#).unwrap();

        assert_eq!(config.input.as_deref(), Some("seq.json"));
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.name, "manifest");
        assert!(config.compress.is_none());
        assert!(!config.preview);
    }

    #[test]
    fn test_compress_forms() {
        let level: FramekitConfig = serde_json::from_str(r#"{"compress": 4}"#).unwrap();
        assert!(matches!(level.compress, Some(CompressConfig::Level(4))));

        let max: FramekitConfig = serde_json::from_str(r#"{"compress": "max"}"#).unwrap();
        assert!(matches!(max.compress, Some(CompressConfig::Max(ref s)) if s == "max"));
    }
}
