//! ESTree JSON interchange
//!
//! Nodes are objects tagged with `"type"`. Schema fields are read by their
//! ESTree names; anything else on the object (`loc`, `start`, `extra`, ...)
//! is ignored on import and not written on export. Missing or `null`
//! fields import as empty slots, so a partially filled tree is accepted
//! here and left to [`validate_tree`](crate::rules::validate_tree).

use serde_json::{Map, Value};

use crate::errors::{PruneError, Result};
use crate::model::{NodeId, NodeKind, Slot};
use crate::ops::Tree;

fn malformed(reason: impl Into<String>) -> PruneError {
    PruneError::MalformedJson {
        reason: reason.into(),
    }
}

fn kind_of(obj: &Map<String, Value>) -> Result<NodeKind> {
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("node object without a string \"type\""))?;

    tag.parse()
        .map_err(|_| PruneError::UnknownNodeKind {
            kind: tag.to_string(),
        })
}

fn scalar_of(kind: NodeKind, obj: &Map<String, Value>) -> Option<Value> {
    kind.scalar_key()
        .and_then(|key| obj.get(key))
        .filter(|v| !v.is_null())
        .cloned()
}

fn as_node_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| malformed(format!("expected a node object, found {}", value)))
}

/// Build a tree from an ESTree document
///
/// # Errors
///
/// * `MalformedJson` - a node is not an object, lacks `"type"`, or a
///   sequence field is not an array of nodes
/// * `UnknownNodeKind` - a `"type"` outside the supported kinds
pub fn import(value: &Value) -> Result<Tree> {
    let obj = as_node_object(value)?;
    let kind = kind_of(obj)?;
    let mut tree = Tree::with_root(kind, scalar_of(kind, obj));
    let root = tree.root();
    import_fields(&mut tree, root, kind, obj)?;
    Ok(tree)
}

/// Parse JSON text and import it
///
/// # Errors
///
/// As [`import`], plus `MalformedJson` for text that is not JSON.
pub fn from_str(text: &str) -> Result<Tree> {
    let value: Value = serde_json::from_str(text)?;
    import(&value)
}

fn import_fields(
    tree: &mut Tree,
    parent: NodeId,
    kind: NodeKind,
    obj: &Map<String, Value>,
) -> Result<()> {
    for (field, shape) in kind.schema() {
        let value = match obj.get(field.as_str()) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };

        if shape.is_sequence() {
            let items = value.as_array().ok_or_else(|| {
                malformed(format!("{}.{} must be an array", kind, field))
            })?;
            for item in items {
                let child = import_node(tree, item)?;
                tree.attach(parent, *field, child)?;
            }
        } else {
            let child = import_node(tree, value)?;
            tree.attach(parent, *field, child)?;
        }
    }
    Ok(())
}

fn import_node(tree: &mut Tree, value: &Value) -> Result<NodeId> {
    let obj = as_node_object(value)?;
    let kind = kind_of(obj)?;
    let id = tree.alloc_with_scalar(kind, scalar_of(kind, obj))?;
    import_fields(tree, id, kind, obj)?;
    Ok(id)
}

/// Render the live tree as ESTree JSON
///
/// Empty single fields are written as `null` and empty sequences as `[]`.
///
/// # Errors
///
/// `NodeNotFound` if a slot holds an id this tree never allocated.
pub fn export(tree: &Tree) -> Result<Value> {
    export_node(tree, tree.root())
}

/// Render the subtree under `id`
///
/// # Errors
///
/// `NodeNotFound` if `id` (or a child) was not allocated by `tree`.
pub fn export_node(tree: &Tree, id: NodeId) -> Result<Value> {
    let node = tree.get(id)?;
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::from(node.kind().name()));

    if let (Some(key), Some(scalar)) = (node.kind().scalar_key(), node.scalar()) {
        obj.insert(key.to_string(), scalar.clone());
    }

    for (field, slot) in node.slots() {
        let value = match slot {
            Slot::Single(None) => Value::Null,
            Slot::Single(Some(child)) => export_node(tree, *child)?,
            Slot::Sequence(ids) => Value::Array(
                ids.iter()
                    .map(|child| export_node(tree, *child))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        obj.insert(field.as_str().to_string(), value);
    }

    Ok(Value::Object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use serde_json::json;

    #[test]
    fn test_import_expression_statement() {
        let doc = json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "BinaryExpression",
                    "operator": "+",
                    "left": { "type": "Identifier", "name": "a" },
                    "right": { "type": "NumericLiteral", "value": 1 }
                }
            }]
        });

        let tree = import(&doc).unwrap();
        let root = tree.root();
        let stmt = tree.children(root, Field::Body).unwrap()[0];
        let bin = tree.child(stmt, Field::Expression).unwrap().unwrap();
        let left = tree.child(bin, Field::Left).unwrap().unwrap();

        assert_eq!(tree.kind(bin).unwrap(), NodeKind::BinaryExpression);
        assert_eq!(tree.get(bin).unwrap().scalar_str(), Some("+"));
        assert_eq!(tree.get(left).unwrap().scalar_str(), Some("a"));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let doc = json!({
            "type": "Program",
            "start": 0,
            "loc": { "line": 1 },
            "body": []
        });
        let tree = import(&doc).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_unknown_kind() {
        let doc = json!({ "type": "Program", "body": [{ "type": "WithStatement" }] });
        assert_eq!(
            import(&doc).err(),
            Some(PruneError::UnknownNodeKind {
                kind: "WithStatement".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_inputs() {
        for doc in [
            json!(42),
            json!({ "body": [] }),
            json!({ "type": "Program", "body": {} }),
            json!({ "type": "Program", "body": [null] }),
            json!({ "type": "ExpressionStatement", "expression": "x" }),
        ] {
            assert!(
                matches!(import(&doc), Err(PruneError::MalformedJson { .. })),
                "{} should be rejected",
                doc
            );
        }
    }

    #[test]
    fn test_from_str_rejects_bad_text() {
        assert!(matches!(
            from_str("{ not json"),
            Err(PruneError::MalformedJson { .. })
        ));
    }

    #[test]
    fn test_export_reports_unallocated_child() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        *tree.slot_mut(root, Field::Body).unwrap() = Slot::Sequence(vec![NodeId::new(99)]);

        assert_eq!(
            export(&tree),
            Err(PruneError::NodeNotFound {
                node_id: NodeId::new(99)
            })
        );
    }

    #[test]
    fn test_export_writes_empty_slots() {
        let mut tree = Tree::new(NodeKind::Program);
        let root = tree.root();
        tree.add(root, Field::Body, NodeKind::ReturnStatement).unwrap();
        tree.add(root, Field::Body, NodeKind::BlockStatement).unwrap();

        assert_eq!(
            export(&tree).unwrap(),
            json!({
                "type": "Program",
                "body": [
                    { "type": "ReturnStatement", "argument": null },
                    { "type": "BlockStatement", "body": [] }
                ]
            })
        );
    }

    #[test]
    fn test_export_after_import_is_stable() {
        let doc = json!({
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "x" },
                "init": { "type": "BooleanLiteral", "value": true }
            }]
        });

        let tree = import(&doc).unwrap();
        assert_eq!(export(&tree).unwrap(), doc);
    }
}
