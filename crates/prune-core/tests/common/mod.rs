use prune_core::json as estree;
use prune_core::traversal::resolve_path;
use prune_core::{validate_tree, NodeId, Tree};
use serde_json::{json, Value};

/// Import an ESTree document for testing
#[allow(dead_code)]
pub fn parse(doc: Value) -> Tree {
    estree::import(&doc).expect("fixture should import")
}

/// Resolve a dotted path, panicking with the path on failure
#[allow(dead_code)]
pub fn at(tree: &Tree, path: &str) -> NodeId {
    resolve_path(tree, path).unwrap_or_else(|e| panic!("no node at '{}': {}", path, e))
}

/// Export the live tree
#[allow(dead_code)]
pub fn dump(tree: &Tree) -> Value {
    estree::export(tree).expect("live tree should export")
}

/// Assert that the live tree has no structural violations
#[allow(dead_code)]
pub fn assert_valid(tree: &Tree) {
    if let Err(e) = validate_tree(tree) {
        panic!("tree invalid after removal: {}\n{:#}", e, dump(tree));
    }
}

#[allow(dead_code)]
pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

#[allow(dead_code)]
pub fn num(value: i64) -> Value {
    json!({ "type": "NumericLiteral", "value": value })
}

#[allow(dead_code)]
pub fn expr_stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

#[allow(dead_code)]
pub fn call(callee: &str) -> Value {
    json!({ "type": "CallExpression", "callee": ident(callee), "arguments": [] })
}

#[allow(dead_code)]
pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

#[allow(dead_code)]
pub fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body })
}

/// `<kind> name = init` with one declarator
#[allow(dead_code)]
pub fn var(kind: &str, name: &str, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": kind,
        "declarations": [{
            "type": "VariableDeclarator",
            "id": ident(name),
            "init": init
        }]
    })
}
