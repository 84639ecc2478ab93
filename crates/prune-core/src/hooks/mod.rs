//! Ordered removal hooks
//!
//! Pre hooks run before a node is taken out of its slot and may absorb or
//! substitute the removal. Post hooks run after the base removal against
//! the mutated parent and may collapse the parent or ask for the parent
//! itself to be removed.
//!
//! Each table is evaluated in order and the first hook returning
//! [`Outcome::Handled`] wins; later hooks are not consulted.

pub mod post;
pub mod pre;

use crate::errors::Result;
use crate::model::{Attachment, Field, NodeId, NodeKind};
use crate::ops::Tree;

/// The node being removed and where it sat when its removal began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalSite {
    pub node: NodeId,
    pub node_kind: NodeKind,
    pub attachment: Attachment,
    pub parent_kind: NodeKind,
}

impl RemovalSite {
    /// Snapshot the site of an attached node
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if either the node or its parent is missing.
    pub fn new(tree: &Tree, node: NodeId, attachment: Attachment) -> Result<Self> {
        Ok(Self {
            node,
            node_kind: tree.kind(node)?,
            attachment,
            parent_kind: tree.kind(attachment.parent)?,
        })
    }

    pub fn parent(&self) -> NodeId {
        self.attachment.parent
    }

    /// Field the node hung off
    pub fn key(&self) -> Field {
        self.attachment.field
    }
}

/// How a hook resolved a removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The slot was kept and the node's own contents were cleared
    Absorbed { cleared: Vec<NodeId> },
    /// The node was swapped for a placeholder
    Substituted { placeholder: NodeId },
    /// The parent is meaningless without the removed child and must go too
    Cascade,
    /// The parent was replaced by one of its remaining children
    Collapsed { replacement: NodeId },
}

/// Result of evaluating one hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotHandled,
    Handled(Resolution),
}

/// Signature shared by pre and post hooks
pub type HookFn = fn(&mut Tree, &RemovalSite) -> Result<Outcome>;

/// A named hook
#[derive(Clone, Copy)]
pub struct Hook {
    pub name: &'static str,
    pub apply: HookFn,
}

impl std::fmt::Debug for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hook").field("name", &self.name).finish()
    }
}

/// Evaluate a hook table, stopping at the first handled outcome
///
/// Returns the winning hook's name with its resolution, or `None` when no
/// hook matched.
///
/// # Errors
///
/// Propagates the first primitive failure raised by a hook.
pub fn run_hooks(
    hooks: &[Hook],
    tree: &mut Tree,
    site: &RemovalSite,
) -> Result<Option<(&'static str, Resolution)>> {
    for hook in hooks {
        if let Outcome::Handled(resolution) = (hook.apply)(tree, site)? {
            tracing::debug!(
                hook = hook.name,
                node_id = site.node.get(),
                parent_id = site.parent().get(),
                field = site.key().as_str(),
                event = prune_core_types::schema::EVENT_HOOK_MATCHED,
            );
            return Ok(Some((hook.name, resolution)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::tree_ops::attachment_of;
    use crate::Tree;

    fn never(_: &mut Tree, _: &RemovalSite) -> Result<Outcome> {
        Ok(Outcome::NotHandled)
    }

    fn always(_: &mut Tree, _: &RemovalSite) -> Result<Outcome> {
        Ok(Outcome::Handled(Resolution::Cascade))
    }

    fn panics(_: &mut Tree, _: &RemovalSite) -> Result<Outcome> {
        panic!("hook after the first match must not run");
    }

    #[test]
    fn test_first_match_wins() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        let stmt = tree.add(root, Field::Body, NodeKind::EmptyStatement).unwrap();
        let at = attachment_of(&tree, stmt).unwrap().unwrap();
        let site = RemovalSite::new(&tree, stmt, at).unwrap();

        let table = [
            Hook { name: "never", apply: never },
            Hook { name: "always", apply: always },
            Hook { name: "panics", apply: panics },
        ];

        let result = run_hooks(&table, &mut tree, &site).unwrap();
        assert_eq!(result, Some(("always", Resolution::Cascade)));
    }

    #[test]
    fn test_no_match() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        let stmt = tree.add(root, Field::Body, NodeKind::EmptyStatement).unwrap();
        let at = attachment_of(&tree, stmt).unwrap().unwrap();
        let site = RemovalSite::new(&tree, stmt, at).unwrap();

        let table = [Hook { name: "never", apply: never }];
        assert_eq!(run_hooks(&table, &mut tree, &site).unwrap(), None);
    }
}
