use serde::{Deserialize, Serialize};

use super::field::{Field, Shape};
use super::kind::NodeKind;

/// Stable index of a node inside its [`Tree`](crate::ops::Tree)
///
/// Ids are never reused: a detached node keeps its id for as long as the
/// tree lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage for one field of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    Single(Option<NodeId>),
    Sequence(Vec<NodeId>),
}

impl Slot {
    fn empty(shape: Shape) -> Self {
        if shape.is_sequence() {
            Slot::Sequence(Vec::new())
        } else {
            Slot::Single(None)
        }
    }

    /// Children held by this slot, in order
    pub fn ids(&self) -> &[NodeId] {
        match self {
            Slot::Single(Some(id)) => std::slice::from_ref(id),
            Slot::Single(None) => &[],
            Slot::Sequence(ids) => ids,
        }
    }
}

/// Back-reference from a child to the slot that owns it
///
/// Only the parent and field are stored; a sequence index goes stale as
/// siblings are spliced, so it is recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    pub parent: NodeId,
    pub field: Field,
}

/// One syntax construct
///
/// Slots are created empty from the kind's schema, so every schema field
/// exists on the node from allocation onwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,

    /// Identifier name, literal value, operator or declaration kind
    scalar: Option<serde_json::Value>,

    slots: Vec<(Field, Slot)>,

    pub(crate) link: Option<ParentLink>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, scalar: Option<serde_json::Value>) -> Self {
        let slots = kind
            .schema()
            .iter()
            .map(|(field, shape)| (*field, Slot::empty(*shape)))
            .collect();

        Self {
            kind,
            scalar,
            slots,
            link: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn scalar(&self) -> Option<&serde_json::Value> {
        self.scalar.as_ref()
    }

    /// Scalar payload as a string, if it is one
    pub fn scalar_str(&self) -> Option<&str> {
        self.scalar.as_ref().and_then(|v| v.as_str())
    }

    /// The slot holding this node, if attached
    pub fn link(&self) -> Option<ParentLink> {
        self.link
    }

    pub fn slot(&self, field: Field) -> Option<&Slot> {
        self.slots.iter().find(|(f, _)| *f == field).map(|(_, s)| s)
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| s)
    }

    /// All slots, in schema order
    pub fn slots(&self) -> impl Iterator<Item = (Field, &Slot)> {
        self.slots.iter().map(|(f, s)| (*f, s))
    }
}
