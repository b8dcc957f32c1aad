//! Request-scoped authorization and extraction helpers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::session::{ADMIN_GROUP, Session};

/// Role derived from a session's `group` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// `group == "admin"`.
    Admin,
    /// Some other non-empty group.
    Member(String),
    /// No group.
    Anonymous,
}

/// Authorization context for one request.
///
/// Inserted into request extensions by [`SessionLayer`](crate::SessionLayer)
/// and read by the admin gate and admin handlers. It is derived fresh on
/// every request and never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContext {
    /// The caller's role.
    pub role: Role,
}

impl AuthContext {
    /// Derive the context from a decoded session.
    pub fn from_session(session: &Session) -> Self {
        let role = match session.group.as_deref() {
            Some(ADMIN_GROUP) => Role::Admin,
            Some("") | None => Role::Anonymous,
            Some(other) => Role::Member(other.to_string()),
        };
        Self { role }
    }

    /// A context with no privileges.
    pub fn anonymous() -> Self {
        Self {
            role: Role::Anonymous,
        }
    }

    /// Whether the admin area is accessible.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Extract the `AuthContext` from HTTP request `Parts`.
///
/// Returns an anonymous context if the session layer did not run.
pub fn context_from_parts(parts: &Parts) -> AuthContext {
    parts
        .extensions
        .get::<AuthContext>()
        .cloned()
        .unwrap_or_default()
}

/// Extract the `Session` from HTTP request `Parts`.
///
/// Returns an empty session if the session layer did not run.
pub fn session_from_parts(parts: &Parts) -> Session {
    parts.extensions.get::<Session>().cloned().unwrap_or_default()
}

impl<S: Send + Sync> FromRequestParts<S> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(context_from_parts(parts))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(session_from_parts(parts))
    }
}
