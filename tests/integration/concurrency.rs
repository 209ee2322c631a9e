//! Concurrent requests and callers that go away mid-request.

use super::stores::SlowStorage;
use crate::common::builders::UserBuilder;
use crate::common::{context, test_server_with_storage};
use buddy_api::BuddyServer;
use buddy_api::storage::StorageProvider;
use futures::future::join_all;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (server, storage) = test_server_with_storage();
    let server = Arc::new(server);

    let tasks = (0..20).map(|i| {
        let server = Arc::clone(&server);
        tokio::spawn(async move {
            let ctx = context(&format!("concurrent_{}", i));
            server
                .users()
                .unwrap()
                .create(UserBuilder::new().with_name(format!("Skati {}", i)).build(), &ctx)
                .await
        })
    });

    let ids: HashSet<String> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap()["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids.len(), 20);
    assert_eq!(storage.count("users").await.unwrap(), 20);
}

#[tokio::test]
async fn test_concurrent_updates_all_land() {
    let (server, _storage) = test_server_with_storage();
    let users = server.users().unwrap();
    let ctx = context("concurrent_updates");

    let created = users.create(UserBuilder::new_full().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap();

    let name_update = users.update(id, json!({"name": "X"}), &ctx);
    let email_update = users.update(id, json!({"email": "x@example.is"}), &ctx);
    let (a, b) = tokio::join!(name_update, email_update);
    a.unwrap();
    b.unwrap();

    let fetched = users.get(id, &ctx).await.unwrap();
    assert_eq!(fetched["name"], "X");
    assert_eq!(fetched["email"], "x@example.is");
}

#[tokio::test]
async fn test_dropped_create_still_completes_once() {
    let storage = SlowStorage::new(Duration::from_millis(100));
    let server = BuddyServer::new(storage.clone());
    let users = server.users().unwrap();
    let ctx = context("dropped_create");

    let outcome = tokio::time::timeout(
        Duration::from_millis(10),
        users.create(UserBuilder::new().build(), &ctx),
    )
    .await;
    assert!(outcome.is_err(), "create should still be pending");

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(storage.writes(), 1);
    assert_eq!(storage.inner().count("users").await.unwrap(), 1);
}

#[tokio::test]
async fn test_dropped_delete_still_completes_once() {
    let storage = SlowStorage::new(Duration::from_millis(100));
    let server = BuddyServer::new(storage.clone());
    let users = server.users().unwrap();
    let ctx = context("dropped_delete");

    let created = users.create(UserBuilder::new().build(), &ctx).await.unwrap();
    let id = created["id"].as_str().unwrap();

    let outcome = tokio::time::timeout(Duration::from_millis(10), users.delete(id, &ctx)).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(storage.writes(), 2);
    assert_eq!(storage.inner().count("users").await.unwrap(), 0);
}
