use crate::model::{Field, NodeId, Shape, Slot};
use crate::ops::Tree;

/// Find live nodes whose required single fields are empty
///
/// Returns list of (node_id, field) tuples in pre-order
pub fn find_dangling_required_fields(tree: &Tree) -> Vec<(NodeId, Field)> {
    let mut dangling = Vec::new();

    for id in tree.live_nodes() {
        let Ok(node) = tree.get(id) else { continue };

        for (field, shape) in node.kind().schema() {
            if *shape != Shape::Required {
                continue;
            }
            if matches!(node.slot(*field), Some(Slot::Single(None))) {
                dangling.push((id, *field));
            }
        }
    }

    dangling
}

/// Find live children whose parent link disagrees with the parent's slots
///
/// Returns list of (child_id, parent_id) tuples
pub fn find_broken_back_references(tree: &Tree) -> Vec<(NodeId, NodeId)> {
    let mut broken = Vec::new();

    for parent in tree.live_nodes() {
        let Ok(node) = tree.get(parent) else { continue };

        for (field, slot) in node.slots() {
            for child in slot.ids() {
                let link = tree.get(*child).ok().and_then(|c| c.link());
                let consistent = link.is_some_and(|l| l.parent == parent && l.field == field);
                if !consistent {
                    broken.push((*child, parent));
                }
            }
        }
    }

    broken
}

/// Find live sequence expressions holding a single element
///
/// Not a grammar violation, but never produced by a removal: a removal that
/// leaves one element collapses the sequence.
pub fn find_single_element_sequences(tree: &Tree) -> Vec<NodeId> {
    tree.live_nodes()
        .into_iter()
        .filter(|id| {
            tree.get(*id).is_ok_and(|node| {
                matches!(node.slot(Field::Expressions), Some(Slot::Sequence(ids)) if ids.len() == 1)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use crate::ops::tree_ops::clear_field;

    #[test]
    fn test_fresh_if_has_dangling_fields() {
        let tree = Tree::new(NodeKind::IfStatement);
        let root = tree.root();

        assert_eq!(
            find_dangling_required_fields(&tree),
            vec![(root, Field::Test), (root, Field::Consequent)]
        );
    }

    #[test]
    fn test_complete_if_is_clean() {
        let mut tree = Tree::new(NodeKind::IfStatement);
        let root = tree.root();
        let test = tree.identifier("x").unwrap();
        tree.attach(root, Field::Test, test).unwrap();
        tree.add(root, Field::Consequent, NodeKind::EmptyStatement)
            .unwrap();

        assert!(find_dangling_required_fields(&tree).is_empty());
        assert!(find_broken_back_references(&tree).is_empty());
    }

    #[test]
    fn test_detached_subtrees_are_ignored() {
        let mut tree = Tree::new(NodeKind::ExpressionStatement);
        let root = tree.root();
        let bin = tree
            .add(root, Field::Expression, NodeKind::BinaryExpression)
            .unwrap();
        clear_field(&mut tree, root, Field::Expression).unwrap();

        let dangling = find_dangling_required_fields(&tree);
        assert_eq!(dangling, vec![(root, Field::Expression)]);
        assert!(dangling.iter().all(|(id, _)| *id != bin));
    }

    #[test]
    fn test_single_element_sequence() {
        let mut tree = Tree::new(NodeKind::SequenceExpression);
        let root = tree.root();
        let a = tree.identifier("a").unwrap();
        tree.attach(root, Field::Expressions, a).unwrap();

        assert_eq!(find_single_element_sequences(&tree), vec![root]);
    }
}
