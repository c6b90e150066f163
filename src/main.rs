use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use framekit::cli::{CliArgs, CommonArgs, CompressionLevel};
use framekit::config::LoadedConfig;
use framekit::export::{render, write_export};
use framekit::frame::load_sequence;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();
    let mode = cli.command.mode();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(cli.command.args())?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Framekit v{}", env!("CARGO_PKG_VERSION"));

    let frames = load_sequence(&merged.input)?;
    info!("Loaded {} frames", frames.len());

    // Render before touching the output directory so a failed layout writes nothing
    let rendered = render(mode, &frames)?;

    let manifest = write_export(
        &rendered,
        &merged.output,
        &merged.name,
        merged.compress,
        merged.preview,
    )?;
    info!(
        "Exported {} of {} frames ({:?})",
        manifest.len(),
        frames.len(),
        mode
    );

    info!("Done!");

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    name: String,
    compress: Option<CompressionLevel>,
    preview: bool,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CommonArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Input: CLI > config
    let input = args
        .input
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_input))
        .context("no sequence file given on the command line or in the config file")?;

    // Output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // Name: CLI > config > default
    let name = args.name.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.name.clone())
            .unwrap_or_else(|| "manifest".to_string())
    });

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.compression()?
    } else {
        None
    };

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let preview = args.preview || loaded_config.as_ref().is_some_and(|lc| lc.config.preview);

    Ok(MergedConfig {
        input,
        output,
        name,
        compress,
        preview,
        verbose: args.verbose,
    })
}
