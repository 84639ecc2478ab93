use crate::errors::{PruneError, Result};
use crate::model::{Field, Node, NodeId, NodeKind, ParentLink, Slot};

/// Arena holding every node of one syntax tree
///
/// Nodes are addressed by [`NodeId`] and never freed: removing a node only
/// detaches it (clears its parent link), so ids handed back to callers stay
/// valid. Not thread-safe; a `&mut Tree` is the single writer.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Create a tree whose root is a fresh node of `kind`
    pub fn new(kind: NodeKind) -> Self {
        Self::with_root(kind, None)
    }

    /// Create a tree whose root carries a scalar payload
    pub fn with_root(kind: NodeKind, scalar: Option<serde_json::Value>) -> Self {
        Self {
            nodes: vec![Node::new(kind, scalar)],
            root: NodeId::new(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.root == id
    }

    /// Total number of nodes ever allocated (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node
    ///
    /// # Errors
    ///
    /// Returns `ArenaFull` once every `u32` id has been handed out.
    pub fn alloc(&mut self, kind: NodeKind) -> Result<NodeId> {
        self.alloc_with_scalar(kind, None)
    }

    /// Allocate a detached node carrying a scalar payload
    ///
    /// # Errors
    ///
    /// Returns `ArenaFull` once every `u32` id has been handed out.
    pub fn alloc_with_scalar(
        &mut self,
        kind: NodeKind,
        scalar: Option<serde_json::Value>,
    ) -> Result<NodeId> {
        let id = next_id(self.nodes.len())?;
        self.nodes.push(Node::new(kind, scalar));
        Ok(id)
    }

    /// Allocate an identifier with the given name
    pub fn identifier(&mut self, name: &str) -> Result<NodeId> {
        self.alloc_with_scalar(
            NodeKind::Identifier,
            Some(serde_json::Value::String(name.to_string())),
        )
    }

    /// Get a node by id
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id was not allocated by this tree.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or(PruneError::NodeNotFound { node_id: id })
    }

    /// Get a mutable reference to a node by id
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id was not allocated by this tree.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or(PruneError::NodeNotFound { node_id: id })
    }

    pub fn kind(&self, id: NodeId) -> Result<NodeKind> {
        Ok(self.get(id)?.kind())
    }

    /// Whether the node hangs off a parent
    ///
    /// The root is never "attached"; use [`Tree::is_live`] to include it.
    pub fn is_attached(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.link.is_some())
    }

    /// Whether the node is reachable from the root
    pub fn is_live(&self, id: NodeId) -> Result<bool> {
        let mut current = id;
        loop {
            if current == self.root {
                return Ok(true);
            }
            match self.get(current)?.link {
                Some(link) => current = link.parent,
                None => return Ok(false),
            }
        }
    }

    pub(crate) fn slot(&self, id: NodeId, field: Field) -> Result<&Slot> {
        let node = self.get(id)?;
        node.slot(field).ok_or_else(|| PruneError::UnknownField {
            kind: node.kind().name().to_string(),
            field,
        })
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId, field: Field) -> Result<&mut Slot> {
        let node = self.get_mut(id)?;
        let kind = node.kind();
        node.slot_mut(field).ok_or_else(|| PruneError::UnknownField {
            kind: kind.name().to_string(),
            field,
        })
    }

    /// The child held by a single field
    ///
    /// # Errors
    ///
    /// `UnknownField` if the field is not in the node's schema, `ShapeMismatch`
    /// if the field is a sequence.
    pub fn child(&self, id: NodeId, field: Field) -> Result<Option<NodeId>> {
        match self.slot(id, field)? {
            Slot::Single(child) => Ok(*child),
            Slot::Sequence(_) => Err(PruneError::ShapeMismatch {
                node_id: id,
                field,
                expected: "single field",
            }),
        }
    }

    /// The children held by a sequence field
    ///
    /// # Errors
    ///
    /// `UnknownField` if the field is not in the node's schema, `ShapeMismatch`
    /// if the field holds a single child.
    pub fn children(&self, id: NodeId, field: Field) -> Result<&[NodeId]> {
        match self.slot(id, field)? {
            Slot::Sequence(ids) => Ok(ids),
            Slot::Single(_) => Err(PruneError::ShapeMismatch {
                node_id: id,
                field,
                expected: "sequence",
            }),
        }
    }

    pub fn sequence_len(&self, id: NodeId, field: Field) -> Result<usize> {
        Ok(self.children(id, field)?.len())
    }

    /// Attach a detached node under `parent.field`
    ///
    /// Single fields are overwritten only when empty; sequences get the
    /// child appended.
    ///
    /// # Errors
    ///
    /// * `CannotAttachRoot` - `child` is the root
    /// * `AlreadyAttached` - `child` already has a parent, or the single slot is occupied
    /// * `UnknownField` - `field` is not part of the parent's schema
    pub fn attach(&mut self, parent: NodeId, field: Field, child: NodeId) -> Result<()> {
        if child == self.root {
            return Err(PruneError::CannotAttachRoot { node_id: child });
        }
        if let Some(link) = self.get(child)?.link {
            return Err(PruneError::AlreadyAttached {
                node_id: child,
                parent_id: link.parent,
            });
        }

        match self.slot_mut(parent, field)? {
            Slot::Single(slot @ None) => *slot = Some(child),
            Slot::Single(Some(existing)) => {
                let existing = *existing;
                return Err(PruneError::AlreadyAttached {
                    node_id: existing,
                    parent_id: parent,
                });
            }
            Slot::Sequence(ids) => ids.push(child),
        }

        self.get_mut(child)?.link = Some(ParentLink { parent, field });
        Ok(())
    }

    /// Allocate a node and attach it in one step
    pub fn add(&mut self, parent: NodeId, field: Field, kind: NodeKind) -> Result<NodeId> {
        let id = self.alloc(kind)?;
        self.attach(parent, field, id)?;
        Ok(id)
    }

    /// Nodes reachable from the root, in pre-order
    pub fn live_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            out.push(id);
            if let Ok(node) = self.get(id) {
                let children: Vec<NodeId> = node
                    .slots()
                    .flat_map(|(_, slot)| slot.ids().iter().copied())
                    .collect();
                stack.extend(children.into_iter().rev());
            }
        }

        out
    }
}

/// Id for the node stored at arena index `len`
fn next_id(len: usize) -> Result<NodeId> {
    u32::try_from(len)
        .map(NodeId::new)
        .map_err(|_| PruneError::ArenaFull {
            capacity: u32::MAX as usize + 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree() {
        let tree = Tree::new(NodeKind::Program);
        assert_eq!(tree.len(), 1);
        assert!(tree.is_root(tree.root()));
        assert!(!tree.is_attached(tree.root()).unwrap());
        assert!(tree.is_live(tree.root()).unwrap());
    }

    #[test]
    fn test_attach_single_and_sequence() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();

        let stmt = tree.add(root, Field::Body, NodeKind::ExpressionStatement).unwrap();
        let expr = tree.identifier("a").unwrap();
        tree.attach(stmt, Field::Expression, expr).unwrap();

        assert_eq!(tree.children(root, Field::Body).unwrap(), &[stmt]);
        assert_eq!(tree.child(stmt, Field::Expression).unwrap(), Some(expr));
        assert_eq!(tree.live_nodes(), vec![root, stmt, expr]);
    }

    #[test]
    fn test_attach_twice_fails() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        let stmt = tree.add(root, Field::Body, NodeKind::EmptyStatement).unwrap();

        let result = tree.attach(root, Field::Body, stmt);
        assert!(matches!(result, Err(PruneError::AlreadyAttached { .. })));
    }

    #[test]
    fn test_attach_to_occupied_single_slot_fails() {
        let mut tree = Tree::new(NodeKind::ExpressionStatement);
        let root = tree.root();
        let a = tree.identifier("a").unwrap();
        let b = tree.identifier("b").unwrap();

        tree.attach(root, Field::Expression, a).unwrap();
        let result = tree.attach(root, Field::Expression, b);
        assert!(matches!(result, Err(PruneError::AlreadyAttached { .. })));
    }

    #[test]
    fn test_attach_root_fails() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        let block = tree.alloc(NodeKind::BlockStatement).unwrap();

        let result = tree.attach(block, Field::Body, root);
        assert!(matches!(result, Err(PruneError::CannotAttachRoot { .. })));
    }

    #[test]
    fn test_unknown_field() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        let id = tree.identifier("x").unwrap();

        let result = tree.attach(root, Field::Test, id);
        assert!(matches!(result, Err(PruneError::UnknownField { .. })));
    }

    #[test]
    fn test_shape_mismatch() {
        let tree = Tree::new(NodeKind::Program);
        let result = tree.child(tree.root(), Field::Body);
        assert!(matches!(result, Err(PruneError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_next_id_refuses_to_wrap() {
        assert_eq!(next_id(7).unwrap(), NodeId::new(7));
        assert_eq!(next_id(u32::MAX as usize).unwrap(), NodeId::new(u32::MAX));
        assert!(matches!(
            next_id(u32::MAX as usize + 1),
            Err(PruneError::ArenaFull { .. })
        ));
    }

    #[test]
    fn test_get_nonexistent_node() {
        let tree = Tree::new(NodeKind::Program);
        let result = tree.get(NodeId::new(99));
        assert!(matches!(result, Err(PruneError::NodeNotFound { .. })));
    }
}
