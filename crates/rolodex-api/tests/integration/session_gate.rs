//! Integration tests for login, logout, and the admin gate.

use http::StatusCode;
use rolodex_auth::{Session, SessionCodec, SignedCookieCodec};

use crate::common::TestHarness;

const ADMIN_PATHS: &[&str] = &[
    "/admin",
    "/admin/",
    "/admin/contact/",
    "/admin/contact",
    "/admin/contact/new",
    "/admin/contact/1",
    "/admin/contact/1/edit",
    "/admin/unknown",
];

#[tokio::test]
async fn test_login_sets_admin_session() {
    let mut harness = TestHarness::new();
    let resp = harness.login().await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        r#"User is now logged in. Goto <a href="/home">Home Page</a>"#
    );

    let cookie = harness.cookie.as_deref().unwrap();
    let value = cookie.strip_prefix("rolodex_session=").unwrap();
    let codec = SignedCookieCodec::new("thisIsASecret", None);
    let session = codec.decode(value).unwrap();
    assert_eq!(session.group.as_deref(), Some("admin"));
    assert_eq!(session.username.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut harness = TestHarness::new();
    harness.login().await;
    let resp = harness.logout().await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body,
        r#"User is logged out. Goto <a href="/home">Home Page</a>"#
    );

    let cookie = harness.cookie.as_deref().unwrap();
    let value = cookie.strip_prefix("rolodex_session=").unwrap();
    let session = SignedCookieCodec::new("thisIsASecret", None)
        .decode(value)
        .unwrap();
    assert!(session.group.is_none());
    assert!(session.is_empty());
}

#[tokio::test]
async fn test_set_cookie_attributes() {
    let harness = TestHarness::new();
    let resp = harness.get("/login").await;
    let header = resp.headers.get(http::header::SET_COOKIE).unwrap();
    let header = header.to_str().unwrap();

    assert!(header.starts_with("rolodex_session="));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Path=/"));
}

#[tokio::test]
async fn test_admin_denied_without_session() {
    let harness = TestHarness::seeded().await;
    for path in ADMIN_PATHS {
        let resp = harness.get(path).await;
        assert_eq!(resp.status, StatusCode::FORBIDDEN, "GET {path}");
        assert!(resp.body.contains("Forbidden"));
    }
}

#[tokio::test]
async fn test_login_then_logout_scenario() {
    let mut harness = TestHarness::seeded().await;

    harness.login().await;
    let resp = harness.get("/admin").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("href=\"/admin/contact\""));

    let resp = harness.get("/admin/contact").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("charlie"));

    for path in ["/admin/", "/admin/contact/"] {
        let resp = harness.get(path).await;
        assert_eq!(resp.status, StatusCode::OK, "GET {path}");
    }

    harness.logout().await;
    let resp = harness.get("/admin").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    let resp = harness.get("/admin/").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_tampered_cookie_is_denied() {
    let mut harness = TestHarness::seeded().await;
    harness.login().await;

    let cookie = harness.cookie.take().unwrap();
    let (payload, mac) = cookie.rsplit_once('.').unwrap();
    let flipped = if mac.starts_with('0') { "1" } else { "0" };
    harness.cookie = Some(format!("{payload}.{flipped}{}", &mac[1..]));

    let resp = harness.get("/admin").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cookie_signed_with_other_key_is_denied() {
    let mut harness = TestHarness::new();
    let mut session = Session::default();
    session.log_in_admin();
    let forged = SignedCookieCodec::new("not-the-secret", None)
        .encode(&session)
        .unwrap();
    harness.cookie = Some(format!("rolodex_session={forged}"));

    let resp = harness.get("/admin").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_admin_group_is_denied() {
    let mut harness = TestHarness::new();
    let session = Session {
        username: Some("guest".into()),
        group: Some("staff".into()),
    };
    let value = SignedCookieCodec::new("thisIsASecret", None)
        .encode(&session)
        .unwrap();
    harness.cookie = Some(format!("rolodex_session={value}"));

    let resp = harness.get("/admin").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_garbage_cookie_does_not_break_public_pages() {
    let mut harness = TestHarness::seeded().await;
    harness.cookie = Some("rolodex_session=%%%not-a-cookie".to_string());

    let resp = harness.get("/list").await;
    assert_eq!(resp.status, StatusCode::OK);
}
