//! Integration tests for the admin contact editor.

use http::StatusCode;
use rolodex_core::ContactId;

use crate::common::{TestHarness, contact_form};

async fn admin(harness: TestHarness) -> TestHarness {
    let mut harness = harness;
    harness.login().await;
    harness
}

#[tokio::test]
async fn test_create_redirects_to_list() {
    let harness = admin(TestHarness::sqlite().await).await;

    let form = harness.get("/admin/contact/new").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("action=\"/admin/contact/new\""));

    let resp = harness
        .post_form("/admin/contact/new", &contact_form("delta"))
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/admin/contact");

    let contacts = harness.repo.list().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].uname, "delta");
    assert_eq!(contacts[0].email, "dd@delta.net");
    assert_eq!(contacts[0].notes, "");

    let table = harness.get("/admin/contact").await;
    assert!(table.body.contains("<td>delta</td>"));
}

#[tokio::test]
async fn test_create_duplicate_uname_conflicts() {
    for harness in [TestHarness::seeded().await, seeded_sqlite().await] {
        let harness = admin(harness).await;
        let before = harness.repo.count().await.unwrap();

        let resp = harness
            .post_form("/admin/contact/new", &contact_form("alpha"))
            .await;

        assert_eq!(resp.status, StatusCode::CONFLICT);
        assert!(resp.body.contains("A contact with uname &#x27;alpha&#x27; already exists"));
        assert!(resp.body.contains("value=\"Dana\""), "form is re-rendered");
        assert_eq!(harness.repo.count().await.unwrap(), before);
    }
}

#[tokio::test]
async fn test_create_missing_field_is_unprocessable() {
    let harness = admin(TestHarness::new()).await;

    let resp = harness
        .post_form("/admin/contact/new", "uname=echo&fname=Eve&lname=Echo&phone=1")
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("email is required"));
    assert!(resp.body.contains("value=\"echo\""));
    assert_eq!(harness.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_details_and_missing_id() {
    let harness = admin(TestHarness::seeded().await).await;
    let charlie = harness.repo.list().await.unwrap().remove(2);

    let resp = harness.get(&format!("/admin/contact/{}", charlie.id)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Nothing of note"));
    assert!(resp.body.contains("555-1212"));

    let resp = harness.get("/admin/contact/999").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = harness.get("/admin/contact/999/edit").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_updates_and_preserves_timestamp() {
    let harness = admin(seeded_sqlite().await).await;
    let beta = harness.repo.list().await.unwrap().remove(1);
    let path = format!("/admin/contact/{}/edit", beta.id);

    let form = harness.get(&path).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"bb@beta.net\""));

    let resp = harness
        .post_form(
            &path,
            "uname=beta&fname=Bret&lname=Beta&email=bret%40beta.net&phone=none&notes=moved",
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let updated = harness.repo.get(beta.id).await.unwrap();
    assert_eq!(updated.fname, "Bret");
    assert_eq!(updated.email, "bret@beta.net");
    assert_eq!(updated.notes, "moved");
    assert_eq!(updated.timestamp, beta.timestamp);
}

#[tokio::test]
async fn test_edit_to_taken_uname_leaves_rows_unchanged() {
    let harness = admin(seeded_sqlite().await).await;
    let before = harness.repo.list().await.unwrap();
    let beta = &before[1];

    let resp = harness
        .post_form(
            &format!("/admin/contact/{}/edit", beta.id),
            "uname=alpha&fname=Brett&lname=Beta&email=bb%40beta.net&phone=none&notes=",
        )
        .await;

    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(harness.repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_edit_missing_id_is_not_found() {
    let harness = admin(TestHarness::new()).await;
    let resp = harness
        .post_form("/admin/contact/42/edit", &contact_form("ghost"))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let harness = admin(TestHarness::seeded().await).await;

    for path in ["/admin/contact/abc", "/admin/contact/abc/edit"] {
        let resp = harness.get(path).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "GET {path}");
        assert!(resp.body.starts_with("<h1>Bad Request</h1>"));
        assert_eq!(
            resp.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    let resp = harness.post_form("/admin/contact/abc/delete", "").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(harness.repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete() {
    let harness = admin(TestHarness::seeded().await).await;
    let alpha = harness.repo.list().await.unwrap().remove(0);

    let resp = harness
        .post_form(&format!("/admin/contact/{}/delete", alpha.id), "")
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/admin/contact");
    assert_eq!(harness.repo.count().await.unwrap(), 2);
    assert!(harness.repo.get(alpha.id).await.is_err());

    let resp = harness
        .post_form(&format!("/admin/contact/{}/delete", alpha.id), "")
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_writes_denied_without_session() {
    let harness = TestHarness::seeded().await;

    let resp = harness
        .post_form("/admin/contact/new", &contact_form("mallory"))
        .await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);

    let resp = harness.post_form("/admin/contact/1/delete", "").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);

    assert_eq!(harness.repo.count().await.unwrap(), 3);
    assert!(harness.repo.get(ContactId(1)).await.is_ok());
}

#[tokio::test]
async fn test_user_values_are_escaped() {
    let harness = admin(TestHarness::new()).await;
    harness
        .post_form(
            "/admin/contact/new",
            "uname=x&fname=%3Cscript%3E&lname=L&email=e&phone=p&notes=%3Cb%3Ehi%3C%2Fb%3E",
        )
        .await;

    let table = harness.get("/admin/contact").await;
    assert!(table.body.contains("&lt;script&gt;"));
    assert!(!table.body.contains("<script>"));

    let list = harness.get("/list").await;
    assert!(list.body.contains("L, &lt;script&gt;"));
}

async fn seeded_sqlite() -> TestHarness {
    let harness = TestHarness::sqlite().await;
    rolodex_storage::seed_sample_contacts(harness.repo.as_ref()).await;
    harness
}
