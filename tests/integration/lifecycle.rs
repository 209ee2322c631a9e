//! Document lifecycle through the resource providers.

use crate::common::builders::{GroupBuilder, UserBuilder};
use crate::common::fixtures::UNKNOWN_ID;
use crate::common::{context, init_logging, test_server, test_server_with_storage};
use buddy_api::ErrorKind;
use buddy_api::storage::StorageProvider;
use serde_json::json;

#[tokio::test]
async fn test_user_lifecycle() {
    init_logging();
    let server = test_server();
    let users = server.users().unwrap();
    let ctx = context("user_lifecycle");

    let created = users.create(UserBuilder::new_full().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let fetched = users.get(&id, &ctx).await.unwrap();
    assert_eq!(fetched, created);

    users
        .update(&id, json!({"email": "nyr@example.is"}), &ctx)
        .await
        .unwrap();
    let fetched = users.get(&id, &ctx).await.unwrap();
    assert_eq!(fetched["email"], "nyr@example.is");
    assert_eq!(fetched["name"], created["name"]);

    users.delete(&id, &ctx).await.unwrap();
    assert_error_kind!(users.get(&id, &ctx).await, ErrorKind::NotFound);
    assert!(users.list(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_lifecycle() {
    let server = test_server();
    let groups = server.groups().unwrap();
    let ctx = context("group_lifecycle");

    let created = groups.create(GroupBuilder::new().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["type"], "troop");

    groups.update(&id, json!({"type": "union"}), &ctx).await.unwrap();
    assert_eq!(groups.get(&id, &ctx).await.unwrap()["type"], "union");

    groups.delete(&id, &ctx).await.unwrap();
    assert_error_kind!(groups.delete(&id, &ctx).await, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_returns_exactly_validated_fields_plus_id() {
    let server = test_server();
    let users = server.users().unwrap();
    let ctx = context("create_fields");

    let payload = UserBuilder::new()
        .with_field("nickname", "Nonni")
        .with_address(json!({"postal": "101"}))
        .build();
    let created = users.create(payload, &ctx).await.unwrap();

    let mut keys: Vec<&str> = created.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["address", "id", "name", "personalId"]);
    assert_eq!(created["address"]["postal"], json!(101));
}

#[tokio::test]
async fn test_list_returns_creation_order() {
    let server = test_server();
    let users = server.users().unwrap();
    let ctx = context("list_order");

    let mut ids = Vec::new();
    for i in 0..5 {
        let created = users
            .create(UserBuilder::new().with_name(format!("Skati {}", i)).build(), &ctx)
            .await
            .unwrap();
        ids.push(created["id"].clone());
    }

    let listed: Vec<_> = users
        .list(&ctx)
        .await
        .unwrap()
        .into_iter()
        .map(|doc| doc["id"].clone())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_update_only_touches_given_fields() {
    let server = test_server();
    let users = server.users().unwrap();
    let ctx = context("update_fields");

    let created = users.create(UserBuilder::new_full().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap();

    users.update(id, json!({"name": "X"}), &ctx).await.unwrap();

    let mut expected = created.clone();
    expected["name"] = json!("X");
    assert_eq!(users.get(id, &ctx).await.unwrap(), expected);
}

#[tokio::test]
async fn test_update_with_stripped_fields_keeps_document() {
    let server = test_server();
    let users = server.users().unwrap();
    let ctx = context("update_stripped");

    let created = users.create(UserBuilder::new().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap();

    users
        .update(id, json!({"name": "X", "nickname": "Nonni"}), &ctx)
        .await
        .unwrap();
    let fetched = users.get(id, &ctx).await.unwrap();
    assert!(fetched.get("nickname").is_none());
}

#[tokio::test]
async fn test_invalid_requests_leave_store_untouched() {
    let (server, storage) = test_server_with_storage();
    let users = server.users().unwrap();
    let ctx = context("untouched");

    let created = users.create(UserBuilder::new().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap();

    assert!(users.create(UserBuilder::new().without("name").build(), &ctx).await.is_err());
    assert!(users.update(id, json!({"name": ""}), &ctx).await.is_err());
    assert!(users.update(UNKNOWN_ID, json!({"name": "X"}), &ctx).await.is_err());

    assert_eq!(storage.count("users").await.unwrap(), 1);
    assert_eq!(users.get(id, &ctx).await.unwrap(), created);
}

#[tokio::test]
async fn test_custom_collections() {
    let storage = buddy_api::storage::InMemoryStorage::new();
    let server = buddy_api::BuddyServerBuilder::new(storage.clone())
        .with_users_collection("members")
        .with_groups_collection("units")
        .build()
        .unwrap();
    let ctx = context("collections");

    server
        .users()
        .unwrap()
        .create(UserBuilder::new().build(), &ctx)
        .await
        .unwrap();
    server
        .groups()
        .unwrap()
        .create(GroupBuilder::new().build(), &ctx)
        .await
        .unwrap();

    assert_eq!(storage.count("members").await.unwrap(), 1);
    assert_eq!(storage.count("units").await.unwrap(), 1);
    assert_eq!(storage.count("users").await.unwrap(), 0);
    assert_eq!(
        storage.list_collections().await,
        vec!["members".to_string(), "units".to_string()]
    );
}

mod properties {
    use crate::common::builders::UserBuilder;
    use crate::common::{context, test_server};
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_update_name_changes_only_name(name in "[A-Za-z][A-Za-z ]{0,254}") {
            tokio_test::block_on(async {
                let server = test_server();
                let users = server.users().unwrap();
                let ctx = context("prop_update_name");

                let created = users.create(UserBuilder::new_full().build(), &ctx).await.unwrap();
                let id = created["id"].as_str().unwrap();
                users.update(id, json!({"name": name.clone()}), &ctx).await.unwrap();

                let mut expected = created.clone();
                expected["name"] = json!(name);
                assert_eq!(users.get(id, &ctx).await.unwrap(), expected);
            });
        }

        #[test]
        fn prop_identical_creates_get_distinct_ids(copies in 2usize..6) {
            tokio_test::block_on(async {
                let server = test_server();
                let users = server.users().unwrap();
                let ctx = context("prop_distinct_ids");

                let mut ids = std::collections::HashSet::new();
                for _ in 0..copies {
                    let created = users.create(UserBuilder::new().build(), &ctx).await.unwrap();
                    ids.insert(created["id"].as_str().unwrap().to_string());
                }
                assert_eq!(ids.len(), copies);
            });
        }
    }
}
