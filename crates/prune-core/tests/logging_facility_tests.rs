#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{at, ident, parse, program};
use prune_core::errors::PruneError;
use prune_core::logging_facility::test_capture::init_test_capture;
use prune_core::{log_op_end, log_op_error, log_op_start, remove, NodeId};
use prune_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_HOOK_MATCHED, EVENT_START, FIELD_ERR_CODE, FIELD_HOOK,
    FIELD_TERMINAL,
};
use serde_json::json;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PruneError::NodeDetached {
        node_id: NodeId::new(7),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1);
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_DETACHED"));
    assert_eq!(error_events[0].field("err.kind"), Some("Detached"));
}

#[test]
fn test_remove_emits_start_and_end() {
    let capture = init_test_capture();

    // throw err;  -> the only substitution in this file
    let mut tree = parse(program(vec![json!({
        "type": "ThrowStatement",
        "argument": ident("err")
    })]));
    let argument = at(&tree, "body.0.argument");

    remove(&mut tree, argument).unwrap();

    let node_id = Some(argument.get());
    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("remove")
            && e.event.as_deref() == Some(EVENT_START)
            && e.node_id() == node_id
    });
    let substituted_ends: Vec<_> = capture
        .find("remove", EVENT_END)
        .into_iter()
        .filter(|e| e.field(FIELD_TERMINAL) == Some("substituted"))
        .collect();

    assert!(starts >= 1);
    assert_eq!(substituted_ends.len(), 1);
    assert_eq!(substituted_ends[0].node_id(), node_id);
    assert_eq!(substituted_ends[0].field("removed_count"), Some("1"));
}

#[test]
fn test_remove_failure_emits_error_event() {
    let capture = init_test_capture();

    let mut tree = parse(program(vec![]));
    let loose = tree.identifier("loose").unwrap();

    let result = remove(&mut tree, loose);
    assert!(result.is_err());

    let detached_errors = capture.count_events(|e| {
        e.op.as_deref() == Some("remove")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_DETACHED")
    });
    assert!(detached_errors >= 1);
}

#[test]
fn test_matched_hook_is_logged() {
    let capture = init_test_capture();

    // (a || b);  -> the only binary collapse in this file
    let mut tree = parse(program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "LogicalExpression",
            "operator": "||",
            "left": ident("a"),
            "right": ident("b")
        }
    })]));
    let right = at(&tree, "body.0.expression.right");

    remove(&mut tree, right).unwrap();

    let matched = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_HOOK_MATCHED)
            && e.field(FIELD_HOOK) == Some("collapse_binary")
    });
    assert_eq!(matched, 1);
}
