//! Design token extraction CLI
//!
//! # Usage
//!
//! ```bash
//! # Extract with the default (balanced) preset, JSON to stdout
//! cargo run --bin extract-tokens -- --input design.json --pretty
//!
//! # YAML config, output file, progress on stderr
//! RUST_LOG=debug cargo run --bin extract-tokens -- \
//!     --input design.json --config extraction.yaml --output tokens.json
//!
//! # Print the effective configuration as YAML
//! cargo run --bin extract-tokens -- --preset thorough --dump-config
//! ```

use clap::Parser;
use designgraph_ir::config::{ExtractionConfig, Preset, ValidatedConfig};
use designgraph_ir::errors::{DesignGraphError, Result};
use designgraph_ir::pipeline::{CancellationToken, ExtractionPipeline, ProgressUpdate};
use designgraph_ir::shared::models::DesignDocument;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extract-tokens")]
#[command(about = "Extract design tokens, scales and components from a design document", long_about = None)]
struct Cli {
    /// Design document (JSON)
    #[arg(short, long, required_unless_present = "dump_config")]
    input: Option<PathBuf>,

    /// Extraction config (YAML v1)
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Preset: fast, balanced or thorough
    #[arg(short, long)]
    preset: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("extract-tokens failed: {}", err);
            eprintln!("error: {err}");
            if let Some(hint) = hint(&err) {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if cli.dump_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(input) = cli.input.as_ref() else {
        return Err(DesignGraphError::host_access("no input document given"));
    };
    let content = std::fs::read_to_string(input)?;
    let document = DesignDocument::from_json(&content)?;
    info!("extract-tokens: {} ({})", input.display(), config.describe());

    let pipeline = ExtractionPipeline::new(config);
    let mut progress = |update: ProgressUpdate| {
        debug!("progress: {:>3}% {}", update.percent, update.phase);
    };
    let output = pipeline.run(&document, &mut progress, &CancellationToken::new())?;

    for warning in &output.warnings {
        info!("warning: {}", warning);
    }

    let json = output.to_json(cli.pretty)?;
    match cli.output.as_ref() {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("extract-tokens: wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ValidatedConfig> {
    if let Some(path) = cli.config.as_ref() {
        return Ok(ExtractionConfig::from_yaml(&path.to_string_lossy())?);
    }
    let preset: Preset = match cli.preset.as_deref() {
        Some(name) => name.parse()?,
        None => Preset::default(),
    };
    Ok(ExtractionConfig::preset(preset).build()?)
}

fn hint(err: &DesignGraphError) -> Option<&'static str> {
    match err {
        DesignGraphError::HostAccess { .. } => {
            Some("the document needs at least one top-level frame under `roots`")
        }
        DesignGraphError::Config(_) => Some("run with --dump-config to see the accepted fields"),
        DesignGraphError::Json(_) => Some("the input must be a JSON design document"),
        DesignGraphError::Io(_) => None,
    }
}
