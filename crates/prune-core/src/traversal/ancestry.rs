use crate::errors::{PruneError, Result};
use crate::model::NodeId;
use crate::ops::Tree;

/// Compute the ancestor chain of a node
///
/// Follows parent links upward and returns the node itself followed by
/// each ancestor, ending with the root.
///
/// # Errors
///
/// * `NodeNotFound` - if the node (or a recorded parent) doesn't exist
/// * `NodeDetached` - if the chain ends somewhere other than the root
pub fn ancestors(tree: &Tree, id: NodeId) -> Result<Vec<NodeId>> {
    let mut chain = Vec::new();
    let mut current = Some(id);

    while let Some(node) = current {
        // A chain longer than the arena means the links loop
        if chain.len() > tree.len() {
            return Err(PruneError::BrokenBackReference {
                node_id: node,
                parent_id: chain[chain.len() - 1],
            });
        }
        chain.push(node);
        current = tree.get(node)?.link().map(|l| l.parent);
    }

    match chain.last() {
        Some(last) if tree.is_root(*last) => Ok(chain),
        _ => Err(PruneError::NodeDetached { node_id: id }),
    }
}

/// Depth of a node below the root (the root has depth 0)
///
/// # Errors
///
/// As for [`ancestors`].
pub fn depth(tree: &Tree, id: NodeId) -> Result<usize> {
    Ok(ancestors(tree, id)?.len() - 1)
}
