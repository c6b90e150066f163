use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "framekit")]
#[command(version, about = "Export sprite frames to PNG files with an offset manifest", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// One canvas per frame, sized to the frame (offsets relative to the canvas center)
    Trimmed(CommonArgs),
    /// One shared canvas for all frames, sized to their combined bounds
    Equal(CommonArgs),
}

impl Command {
    pub fn args(&self) -> &CommonArgs {
        match self {
            Command::Trimmed(args) | Command::Equal(args) => args,
        }
    }

    pub fn mode(&self) -> ExportMode {
        match self {
            Command::Trimmed(_) => ExportMode::Trimmed,
            Command::Equal(_) => ExportMode::Equal,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Frame sequence file (JSON)
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Load settings from a config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for frame images and the manifest [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base name of the manifest file (manifest.json) [default: manifest]
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Also write an animated GIF preview (<name>.gif)
    #[arg(long)]
    pub preview: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,
}

/// Canvas layout used when exporting frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Per-frame canvas padded to even dimensions
    #[default]
    Trimmed,
    /// Shared canvas covering every frame
    Equal,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compression_level() {
        assert_eq!("0".parse::<CompressionLevel>(), Ok(CompressionLevel::Level(0)));
        assert_eq!("6".parse::<CompressionLevel>(), Ok(CompressionLevel::Level(6)));
        assert_eq!("MAX".parse::<CompressionLevel>(), Ok(CompressionLevel::Max));
        assert!("7".parse::<CompressionLevel>().is_err());
        assert!("fast".parse::<CompressionLevel>().is_err());
    }

    #[test]
    fn test_subcommand_mode() {
        let cli = CliArgs::parse_from(["framekit", "equal", "seq.json", "--compress"]);

        assert_eq!(cli.command.mode(), ExportMode::Equal);
        let args = cli.command.args();
        assert_eq!(args.input, Some(PathBuf::from("seq.json")));
        assert_eq!(args.compress, Some(CompressionLevel::Level(2)));
        assert!(!args.preview);
    }

    #[test]
    fn test_config_replaces_input() {
        let cli = CliArgs::parse_from(["framekit", "trimmed", "-c", "export.json"]);

        assert_eq!(cli.command.mode(), ExportMode::Trimmed);
        assert!(cli.command.args().input.is_none());
    }

    #[test]
    fn test_input_required_without_config() {
        assert!(CliArgs::try_parse_from(["framekit", "trimmed"]).is_err());
    }
}
