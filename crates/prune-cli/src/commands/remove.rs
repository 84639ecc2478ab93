//! Remove command
//!
//! Usage: prune remove --input <FILE> --path <PATH> [--output <FILE>] [--config <FILE>]

use clap::Args;
use std::path::PathBuf;

use prune_core::json;
use prune_core::traversal::resolve_path;
use prune_core::{EngineConfig, Remover, Terminal};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// ESTree JSON file to read
    #[arg(short, long)]
    pub input: PathBuf,

    /// Dotted path of the node to remove (e.g. `body.0.expression.left`)
    #[arg(short, long)]
    pub path: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Engine configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute remove command
///
/// # Errors
///
/// Fails if the input, path or config is invalid, or the removal itself fails.
pub fn execute(args: RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut tree = super::load_tree(&args.input)?;
    let target = resolve_path(&tree, &args.path)?;

    let report = Remover::with_config(config).remove(&mut tree, target)?;
    tracing::debug!(path = %args.path, hooks = ?report.hooks, "removal finished");

    let rendered = serde_json::to_string_pretty(&json::export(&tree)?)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, format!("{}\n", rendered))?;
    } else {
        println!("{}", rendered);
    }

    eprintln!(
        "✓ Removed {} ({}, {} node{} detached, cascade depth {})",
        args.path,
        describe(&report.terminal),
        report.removed.len(),
        if report.removed.len() == 1 { "" } else { "s" },
        report.cascade_depth
    );

    Ok(())
}

fn describe(terminal: &Terminal) -> String {
    match terminal {
        Terminal::Substituted { .. } => "replaced with undefined".to_string(),
        Terminal::Collapsed { .. } => "parent collapsed".to_string(),
        other => other.as_str().replace('_', " "),
    }
}
