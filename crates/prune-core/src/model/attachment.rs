use serde::{Deserialize, Serialize};

use super::field::Field;
use super::node::NodeId;

/// Where a node sits inside its parent
///
/// Attachment points are snapshots: they are computed from the tree right
/// before they are used and are not kept across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The node owning the slot
    pub parent: NodeId,

    /// Field of the parent holding the node
    pub field: Field,

    /// Position and length when the field is a sequence
    pub position: Option<SequencePosition>,
}

/// Index of a node inside a sequence field, and the sequence length at the
/// time the attachment was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePosition {
    pub index: usize,
    pub len: usize,
}

impl Attachment {
    /// The sequence index, for nodes held in a sequence field
    pub fn index(&self) -> Option<usize> {
        self.position.map(|p| p.index)
    }

    /// Whether the node is held in a sequence field
    pub fn in_sequence(&self) -> bool {
        self.position.is_some()
    }

    /// The field name as used in a sequence (the "container key"), if any
    pub fn container_field(&self) -> Option<Field> {
        self.position.map(|_| self.field)
    }
}

impl std::fmt::Display for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(p) => write!(f, "{}.{}[{}/{}]", self.parent, self.field, p.index, p.len),
            None => write!(f, "{}.{}", self.parent, self.field),
        }
    }
}
