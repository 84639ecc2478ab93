pub mod check;
pub mod remove;

use std::path::Path;

use prune_core::{json, Tree};

/// Read and import an ESTree JSON file
pub fn load_tree(path: &Path) -> prune_core::Result<Tree> {
    let text = std::fs::read_to_string(path)?;
    json::from_str(&text)
}
