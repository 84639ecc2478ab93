//! Check command
//!
//! Usage: prune check --input <FILE>

use clap::Args;
use std::path::PathBuf;

use prune_core::rules::invariants;
use prune_core::validate_tree;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// ESTree JSON file to validate
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Execute check command
///
/// # Errors
///
/// Fails on unreadable input or the first structural violation.
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tree = super::load_tree(&args.input)?;

    for (node_id, field) in invariants::find_dangling_required_fields(&tree) {
        let kind = tree.kind(node_id)?;
        eprintln!("  {} {} is missing '{}'", node_id, kind, field);
    }

    validate_tree(&tree)?;
    println!("✓ {} is structurally valid", args.input.display());
    Ok(())
}
