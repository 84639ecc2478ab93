//! Low-level tree mutation primitives
//!
//! These are the only functions that rewrite slots and parent links. The
//! removal engine composes them; it never touches node storage directly.

use super::tree::Tree;
use crate::errors::{PruneError, Result};
use crate::model::{Attachment, Field, NodeId, ParentLink, SequencePosition, Slot};

/// Name bound by the placeholder substituted for removed expressions
pub const UNDEFINED: &str = "undefined";

/// Compute where a node currently sits
///
/// Returns `None` for the root and for detached nodes.
///
/// # Errors
///
/// * `NodeNotFound` - the id is not part of this tree
/// * `BrokenBackReference` - the recorded parent does not hold the node
pub fn attachment_of(tree: &Tree, id: NodeId) -> Result<Option<Attachment>> {
    let Some(ParentLink { parent, field }) = tree.get(id)?.link else {
        return Ok(None);
    };

    let position = match tree.slot(parent, field)? {
        Slot::Single(Some(child)) if *child == id => None,
        Slot::Sequence(ids) => {
            let index = ids
                .iter()
                .position(|child| *child == id)
                .ok_or(PruneError::BrokenBackReference {
                    node_id: id,
                    parent_id: parent,
                })?;
            Some(SequencePosition {
                index,
                len: ids.len(),
            })
        }
        Slot::Single(_) => {
            return Err(PruneError::BrokenBackReference {
                node_id: id,
                parent_id: parent,
            })
        }
    };

    Ok(Some(Attachment {
        parent,
        field,
        position,
    }))
}

/// Empty a single field, returning the detached child (if there was one)
///
/// # Errors
///
/// `UnknownField` / `ShapeMismatch` if the field is not a single slot of `parent`.
pub fn clear_field(tree: &mut Tree, parent: NodeId, field: Field) -> Result<Option<NodeId>> {
    let taken = match tree.slot_mut(parent, field)? {
        Slot::Single(child) => child.take(),
        Slot::Sequence(_) => {
            return Err(PruneError::ShapeMismatch {
                node_id: parent,
                field,
                expected: "single field",
            })
        }
    };

    if let Some(child) = taken {
        tree.get_mut(child)?.link = None;
    }
    Ok(taken)
}

/// Remove the element at `index` from a sequence field, returning it
///
/// # Errors
///
/// `ShapeMismatch` if the field is not a sequence, `InvalidPath` if the index
/// is out of range.
pub fn splice_from_sequence(
    tree: &mut Tree,
    parent: NodeId,
    field: Field,
    index: usize,
) -> Result<NodeId> {
    let removed = match tree.slot_mut(parent, field)? {
        Slot::Sequence(ids) if index < ids.len() => ids.remove(index),
        Slot::Sequence(ids) => {
            let len = ids.len();
            return Err(PruneError::InvalidPath {
                path: format!("{}.{}.{}", parent, field, index),
                reason: format!("index out of range for sequence of length {}", len),
            });
        }
        Slot::Single(_) => {
            return Err(PruneError::ShapeMismatch {
                node_id: parent,
                field,
                expected: "sequence",
            })
        }
    };

    tree.get_mut(removed)?.link = None;
    Ok(removed)
}

/// Empty a sequence field, returning every detached element in order
///
/// # Errors
///
/// `ShapeMismatch` if the field is not a sequence.
pub fn clear_sequence(tree: &mut Tree, parent: NodeId, field: Field) -> Result<Vec<NodeId>> {
    let removed = match tree.slot_mut(parent, field)? {
        Slot::Sequence(ids) => std::mem::take(ids),
        Slot::Single(_) => {
            return Err(PruneError::ShapeMismatch {
                node_id: parent,
                field,
                expected: "sequence",
            })
        }
    };

    for id in &removed {
        tree.get_mut(*id)?.link = None;
    }
    Ok(removed)
}

/// Base removal: take a node out of the slot described by `attachment`
///
/// # Errors
///
/// Propagates slot errors; `BrokenBackReference` if the slot no longer holds
/// the node.
pub fn detach(tree: &mut Tree, id: NodeId, attachment: &Attachment) -> Result<()> {
    let removed = match attachment.index() {
        Some(index) => splice_from_sequence(tree, attachment.parent, attachment.field, index)?,
        None => clear_field(tree, attachment.parent, attachment.field)?.ok_or(
            PruneError::BrokenBackReference {
                node_id: id,
                parent_id: attachment.parent,
            },
        )?,
    };

    if removed != id {
        return Err(PruneError::BrokenBackReference {
            node_id: id,
            parent_id: attachment.parent,
        });
    }
    Ok(())
}

/// Put `replacement` where `target` is, detaching `target`
///
/// `replacement` is first taken out of its current slot (it is typically a
/// child of `target`). Replacing the root makes `replacement` the new root.
///
/// # Errors
///
/// * `NodeDetached` - `target` is neither attached nor the root
/// * slot errors from the underlying primitives
pub fn replace_with(tree: &mut Tree, target: NodeId, replacement: NodeId) -> Result<()> {
    if target == replacement {
        return Ok(());
    }

    if let Some(current) = attachment_of(tree, replacement)? {
        detach(tree, replacement, &current)?;
    }

    if tree.is_root(target) {
        tree.set_root(replacement);
        return Ok(());
    }

    let Some(ParentLink { parent, field }) = tree.get(target)?.link else {
        return Err(PruneError::NodeDetached { node_id: target });
    };

    match tree.slot_mut(parent, field)? {
        Slot::Single(child) => *child = Some(replacement),
        Slot::Sequence(ids) => {
            let index = ids.iter().position(|child| *child == target).ok_or(
                PruneError::BrokenBackReference {
                    node_id: target,
                    parent_id: parent,
                },
            )?;
            ids[index] = replacement;
        }
    }

    tree.get_mut(target)?.link = None;
    tree.get_mut(replacement)?.link = Some(ParentLink { parent, field });
    Ok(())
}

/// Allocate the canonical `undefined` placeholder expression
pub fn undefined_placeholder(tree: &mut Tree) -> Result<NodeId> {
    tree.identifier(UNDEFINED)
}
