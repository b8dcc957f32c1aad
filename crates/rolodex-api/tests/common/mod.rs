//! Common test utilities and harness for Rolodex API integration tests.

use std::sync::Arc;

use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use rolodex_api::{App, AppState, router};
use rolodex_core::config::SessionConfig;
use rolodex_storage::{
    ContactRepository, Database, MemoryContactRepository, SqliteContactRepository,
    seed_sample_contacts,
};
use tower::ServiceExt;

/// A response with its body collected into a string.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `name=value` pair of the `Set-Cookie` header, without attributes.
    pub fn session_cookie(&self) -> String {
        let set_cookie = self
            .headers
            .get(header::SET_COOKIE)
            .expect("response should set a cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// The `Location` header of a redirect.
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .expect("response should redirect")
            .to_str()
            .unwrap()
    }
}

/// Test harness for integration tests.
///
/// Holds the repository behind the router so tests can assert on storage
/// directly, and the cookie of the current session, if any.
pub struct TestHarness {
    pub repo: Arc<dyn ContactRepository>,
    pub router: App,
    pub cookie: Option<String>,
}

impl TestHarness {
    /// Harness over an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repo(Arc::new(MemoryContactRepository::new()))
    }

    /// Harness over an in-memory repository holding the sample contacts.
    pub async fn seeded() -> Self {
        let harness = Self::new();
        seed_sample_contacts(harness.repo.as_ref()).await;
        harness
    }

    /// Harness over a fresh in-memory SQLite database.
    pub async fn sqlite() -> Self {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        Self::with_repo(Arc::new(SqliteContactRepository::new(db)))
    }

    /// Harness over an arbitrary repository.
    pub fn with_repo(repo: Arc<dyn ContactRepository>) -> Self {
        let state = AppState::new(repo.clone(), &SessionConfig::default());
        Self {
            repo,
            router: router(state),
            cookie: None,
        }
    }

    /// Send a request, attaching the current session cookie.
    pub async fn send(&self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// `POST path` with a urlencoded form body.
    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Call `/login` and keep the returned session cookie.
    pub async fn login(&mut self) -> TestResponse {
        let resp = self.get("/login").await;
        self.cookie = Some(resp.session_cookie());
        resp
    }

    /// Call `/logout` and keep the returned session cookie.
    pub async fn logout(&mut self) -> TestResponse {
        let resp = self.get("/logout").await;
        self.cookie = Some(resp.session_cookie());
        resp
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete, valid contact form body.
pub fn contact_form(uname: &str) -> String {
    format!("uname={uname}&fname=Dana&lname=Delta&email=dd%40delta.net&phone=555-0000&notes=")
}
