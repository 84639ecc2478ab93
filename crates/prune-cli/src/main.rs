//! Prune CLI
//!
//! Command-line interface for removing nodes from ESTree JSON files

use clap::{Parser, Subcommand};
use prune_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "prune")]
#[command(about = "Prune - structure-preserving node removal for ESTree trees", long_about = None)]
struct Cli {
    /// Logging profile (dev, prod); logging is off when omitted
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Remove the node at a path and print the resulting tree
    Remove(commands::remove::RemoveArgs),
    /// Validate a tree's structure
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        init(profile);
    }

    let result = match cli.command {
        Commands::Remove(args) => commands::remove::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
