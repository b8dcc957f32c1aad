//! Integration tests for the public pages.

use std::sync::Arc;

use http::StatusCode;
use rolodex_core::config::DatabaseConfig;
use rolodex_storage::{Database, SqliteContactRepository, seed_sample_contacts};
use tempfile::TempDir;

use crate::common::TestHarness;

#[tokio::test]
async fn test_index_greets_with_time() {
    let harness = TestHarness::new();
    let resp = harness.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.starts_with("<strong>Hello World!</strong>  The time is "));
    assert!(resp.body.ends_with("<br /> Goto <a href='/home'>Home</a>"));
}

#[tokio::test]
async fn test_index_time_has_microsecond_precision() {
    let harness = TestHarness::new();
    let resp = harness.get("/").await;

    let (_, rest) = resp.body.split_once("The time is ").unwrap();
    let (time, _) = rest.split_once(" <br />").unwrap();
    let (date, clock) = time.split_once(' ').unwrap();
    assert_eq!(date.len(), "2026-01-01".len());
    let (hms, fraction) = clock.split_once('.').unwrap();
    assert_eq!(hms.len(), "12:00:00".len());
    assert_eq!(fraction.len(), 6, "fraction {fraction:?}");
    assert!(fraction.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_home_renders_layout() {
    let harness = TestHarness::new();
    let resp = harness.get("/home").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("<title>Home</title>"));
    assert!(resp.body.contains("Sample homepage content"));
    assert!(resp.body.contains("href=\"/admin\""));
}

#[tokio::test]
async fn test_list_empty() {
    let harness = TestHarness::new();
    let resp = harness.get("/list").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "<h1>Contact list</h1>\n");
}

#[tokio::test]
async fn test_list_after_seed_on_fresh_database() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("simple.db"),
        ..DatabaseConfig::default()
    };
    let db = Database::connect(&config).await.unwrap();
    db.init_schema().await.unwrap();
    let repo = Arc::new(SqliteContactRepository::new(db));
    seed_sample_contacts(repo.as_ref()).await;

    let harness = TestHarness::with_repo(repo);
    let resp = harness.get("/list").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        "<h1>Contact list</h1>\nAlpha, Aaron<br/>\nBeta, Brett<br/>\nCharlie, Cindy"
    );
}

#[tokio::test]
async fn test_list_tracks_storage() {
    let harness = TestHarness::seeded().await;
    let before = harness.get("/list").await;
    assert_eq!(before.body.matches("<br/>").count() + 1, 3);

    let contacts = harness.repo.list().await.unwrap();
    harness.repo.delete(contacts[1].id).await.unwrap();

    let after = harness.get("/list").await;
    assert_eq!(
        after.body,
        "<h1>Contact list</h1>\nAlpha, Aaron<br/>\nCharlie, Cindy"
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let harness = TestHarness::new();
    let resp = harness.get("/nowhere").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
