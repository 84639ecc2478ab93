//! Dotted field paths
//!
//! A path names a node by the fields walked from the root, with a numeric
//! segment after every sequence field: `body.0.expression.left`. The empty
//! path names the root.

use super::ancestry::ancestors;
use crate::errors::{PruneError, Result};
use crate::model::{Field, NodeId, Slot};
use crate::ops::{tree_ops, Tree};

fn invalid(path: &str, reason: impl Into<String>) -> PruneError {
    PruneError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Resolve a dotted path from the root
///
/// # Errors
///
/// `InvalidPath` if a segment names a field the node doesn't have, a
/// sequence is missing its index, an index is out of range, or a single
/// field is empty.
pub fn resolve_path(tree: &Tree, path: &str) -> Result<NodeId> {
    let mut current = tree.root();
    let mut segments = path.split('.').filter(|s| !s.is_empty());

    while let Some(segment) = segments.next() {
        let field: Field = segment.parse().map_err(|e: String| invalid(path, e))?;
        let node = tree.get(current)?;
        let slot = node.slot(field).ok_or_else(|| {
            invalid(
                path,
                format!("{} has no field '{}'", node.kind(), field),
            )
        })?;

        current = match slot {
            Slot::Single(Some(child)) => *child,
            Slot::Single(None) => {
                return Err(invalid(path, format!("field '{}' is empty", field)));
            }
            Slot::Sequence(ids) => {
                let index_segment = segments
                    .next()
                    .ok_or_else(|| invalid(path, format!("'{}' needs an index", field)))?;
                let index: usize = index_segment
                    .parse()
                    .map_err(|_| invalid(path, format!("'{}' is not an index", index_segment)))?;
                *ids.get(index).ok_or_else(|| {
                    invalid(
                        path,
                        format!("index {} out of range for '{}' (len {})", index, field, ids.len()),
                    )
                })?
            }
        };
    }

    Ok(current)
}

/// Dotted path from the root to a live node
///
/// # Errors
///
/// `NodeDetached` if the node is not reachable from the root.
pub fn path_to(tree: &Tree, id: NodeId) -> Result<String> {
    let chain = ancestors(tree, id)?;
    let mut segments = Vec::new();

    for node in chain.iter().rev().skip(1) {
        let attachment =
            tree_ops::attachment_of(tree, *node)?.ok_or(PruneError::NodeDetached { node_id: *node })?;
        segments.push(attachment.field.as_str().to_string());
        if let Some(index) = attachment.index() {
            segments.push(index.to_string());
        }
    }

    Ok(segments.join("."))
}
