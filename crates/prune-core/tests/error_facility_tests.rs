use prune_core::errors::{ExError, ExErrorKind, PruneError};
use prune_core::{Field, NodeId};

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = PruneError::NodeNotFound {
        node_id: NodeId::new(99),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.node_id(), Some(NodeId::new(99)));
}

#[test]
fn test_detached_distinct_from_not_found() {
    let err = PruneError::NodeDetached {
        node_id: NodeId::new(4),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Detached);
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.node_id(), Some(NodeId::new(4)));
}

#[test]
fn test_cascade_limit_structured_fields() {
    let err = PruneError::CascadeLimitExceeded {
        node_id: NodeId::new(3),
        limit: 16,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.code(), "ERR_CASCADE_LIMIT");
    assert!(ex_err.message().contains("16"));
    assert!(ex_err.to_string().starts_with("[ERR_CASCADE_LIMIT]"));
}

#[test]
fn test_invalid_path_has_no_node() {
    let err = PruneError::InvalidPath {
        path: "body.9".to_string(),
        reason: "index 9 out of range".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidPath);
    assert_eq!(ex_err.node_id(), None);
    assert!(ex_err.message().contains("body.9"));
}

#[test]
fn test_missing_required_field_message_names_field() {
    let err = PruneError::MissingRequiredField {
        node_id: NodeId::new(2),
        kind: "IfStatement".to_string(),
        field: Field::Test,
    };

    let message = err.to_string();
    assert!(message.contains("IfStatement"));
    assert!(message.contains("test"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Test that each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::Detached, "ERR_DETACHED"),
        (ExErrorKind::AlreadyAttached, "ERR_ALREADY_ATTACHED"),
        (ExErrorKind::ArenaFull, "ERR_ARENA_FULL"),
        (ExErrorKind::CascadeLimit, "ERR_CASCADE_LIMIT"),
        (ExErrorKind::MissingRequiredField, "ERR_MISSING_REQUIRED_FIELD"),
        (ExErrorKind::InvalidPath, "ERR_INVALID_PATH"),
        (ExErrorKind::MalformedJson, "ERR_MALFORMED_JSON"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
