//! Partial (update) schema validation.

use buddy_api::ValidationErrorKind;
use buddy_api::schema::{SchemaRegistry, validate};
use serde_json::json;

fn partial(resource: &str) -> buddy_api::Schema {
    SchemaRegistry::new().get(resource).unwrap().partial.clone()
}

#[test]
fn test_empty_payload_rejected_for_both_resources() {
    for resource in ["users", "groups"] {
        let err = validate(&partial(resource), &json!({})).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooFewFields { min: 1 });
        assert_eq!(err.path, "");
    }
}

#[test]
fn test_unrecognized_fields_only_rejected() {
    for resource in ["users", "groups"] {
        let result = validate(&partial(resource), &json!({"nickname": "Nonni"}));
        assert!(result.is_err(), "{}", resource);
    }
}

#[test]
fn test_single_field_updates() {
    let users = partial("users");
    for payload in [
        json!({"name": "X"}),
        json!({"email": "x@example.is"}),
        json!({"address": {"city": "Akureyri"}}),
    ] {
        assert_valid!(validate(&users, &payload));
    }

    let groups = partial("groups");
    for payload in [
        json!({"name": "X"}),
        json!({"email": "x@example.is"}),
        json!({"type": "association"}),
        json!({"personalId": "4101302039"}),
    ] {
        assert_valid!(validate(&groups, &payload));
    }
}

#[test]
fn test_constraints_still_apply() {
    let users = partial("users");
    assert_violation!(validate(&users, &json!({"name": "a".repeat(256)})), "name");
    assert_violation!(validate(&users, &json!({"email": "nope"})), "email");
    assert_violation!(
        validate(&users, &json!({"address": {"country": "I"}})),
        "address.country"
    );

    let groups = partial("groups");
    assert_violation!(validate(&groups, &json!({"type": "club"})), "type");
    assert_violation!(validate(&groups, &json!({"personalId": "0101302999"})), "personalId");
}

#[test]
fn test_user_personal_id_fixed_after_create() {
    let err = validate(&partial("users"), &json!({"personalId": "0101302989"})).unwrap_err();
    assert_eq!(err.path, "personalId");
    assert_eq!(err.kind, ValidationErrorKind::NotAllowed);
}

#[test]
fn test_id_cannot_be_updated() {
    for resource in ["users", "groups"] {
        let result = validate(&partial(resource), &json!({"id": "x", "name": "X"}));
        assert_violation!(result, "id");
    }
}
