use crate::errors::{PruneError, Result};
use crate::ops::Tree;

use super::invariants;

/// Validate the structure of the live tree
///
/// Checks, in order:
///
/// 1. Every child's parent link points back at the slot holding it
/// 2. No required single field is empty
///
/// Detached nodes are not checked.
///
/// # Errors
///
/// Returns the first violation found. For exhaustive reporting, call the
/// individual invariant functions directly.
pub fn validate_tree(tree: &Tree) -> Result<()> {
    if let Some((node_id, parent_id)) = invariants::find_broken_back_references(tree).first() {
        return Err(PruneError::BrokenBackReference {
            node_id: *node_id,
            parent_id: *parent_id,
        });
    }

    if let Some((node_id, field)) = invariants::find_dangling_required_fields(tree).first() {
        let kind = tree.kind(*node_id)?;
        return Err(PruneError::MissingRequiredField {
            node_id: *node_id,
            kind: kind.name().to_string(),
            field: *field,
        });
    }

    Ok(())
}
