//! Tower session and admin-gate middleware.
//!
//! `SessionLayer` decodes the session cookie on every request and inserts
//! [`Session`] and [`AuthContext`] into request extensions. It never rejects
//! a request: a missing or bad cookie yields an empty session.
//!
//! `AdminGateLayer` wraps the admin routes and admits a request only if its
//! `AuthContext` is admin. It must sit inside `SessionLayer`.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{Request, StatusCode};
use tower::{Layer, Service};

use crate::{AuthContext, CookieSettings, Session, SessionCodec};

// ============================================================================
// SessionLayer
// ============================================================================

/// Tower `Layer` that decodes the session cookie.
#[derive(Clone)]
pub struct SessionLayer<C: SessionCodec> {
    codec: Arc<C>,
    cookie: CookieSettings,
}

impl<C: SessionCodec> SessionLayer<C> {
    /// Create a new session layer with the given codec and cookie settings.
    pub fn new(codec: Arc<C>, cookie: CookieSettings) -> Self {
        Self { codec, cookie }
    }
}

impl<C: SessionCodec, S> Layer<S> for SessionLayer<C> {
    type Service = SessionService<C, S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionService {
            inner,
            codec: self.codec.clone(),
            cookie: self.cookie.clone(),
        }
    }
}

/// Tower `Service` that attaches the decoded session to each request.
#[derive(Clone)]
pub struct SessionService<C: SessionCodec, S> {
    inner: S,
    codec: Arc<C>,
    cookie: CookieSettings,
}

impl<C, S> SessionService<C, S>
where
    C: SessionCodec,
{
    fn session_for(&self, req: &Request<Body>) -> Session {
        let Some(value) = self.cookie.read(req.headers()) else {
            return Session::default();
        };
        match self.codec.decode(value) {
            Ok(session) => session,
            Err(e) if e.is_client_error() => {
                tracing::debug!("Ignoring session cookie: {e}");
                Session::default()
            }
            Err(e) => {
                tracing::warn!("Failed to decode session cookie: {e}");
                Session::default()
            }
        }
    }
}

impl<C, S> Service<Request<Body>> for SessionService<C, S>
where
    C: SessionCodec,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let session = self.session_for(&req);
        let context = AuthContext::from_session(&session);
        req.extensions_mut().insert(session);
        req.extensions_mut().insert(context);

        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

// ============================================================================
// AdminGateLayer
// ============================================================================

/// Tower `Layer` that admits only admin sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminGateLayer;

impl AdminGateLayer {
    /// Create a new admin gate.
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for AdminGateLayer {
    type Service = AdminGateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AdminGateService { inner }
    }
}

/// Tower `Service` that answers `403 Forbidden` unless the request's
/// `AuthContext` is admin. Evaluated on every request.
#[derive(Clone, Debug)]
pub struct AdminGateService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for AdminGateService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let allowed = req
            .extensions()
            .get::<AuthContext>()
            .is_some_and(AuthContext::is_admin);

        if !allowed {
            tracing::info!(path = %req.uri().path(), "Admin access denied");
            return Box::pin(async { Ok(forbidden_response()) });
        }

        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

/// Build a 403 Forbidden response.
fn forbidden_response() -> axum::response::Response {
    (
        StatusCode::FORBIDDEN,
        [(http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        "<h1>Forbidden</h1>\n<p>You don't have the permission to access the requested resource.</p>",
    )
        .into_response()
}
