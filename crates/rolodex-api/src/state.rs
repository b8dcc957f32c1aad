//! Shared handler state.

use std::sync::Arc;

use http::HeaderValue;
use rolodex_auth::{CookieSettings, Session, SessionCodec, SignedCookieCodec};
use rolodex_core::config::SessionConfig;
use rolodex_storage::ContactRepository;

use crate::Result;

/// State handed to every handler.
///
/// Cheap to clone. The repository is the single storage handle opened at
/// startup; it is passed here explicitly rather than held globally.
#[derive(Clone)]
pub struct AppState {
    /// Contact storage.
    pub repo: Arc<dyn ContactRepository>,
    /// Session cookie codec.
    pub codec: Arc<SignedCookieCodec>,
    /// Session cookie attributes.
    pub cookie: CookieSettings,
}

impl AppState {
    /// Build state from a repository and the `[session]` config section.
    pub fn new(repo: Arc<dyn ContactRepository>, session: &SessionConfig) -> Self {
        Self {
            repo,
            codec: Arc::new(SignedCookieCodec::from_config(session)),
            cookie: CookieSettings::from_config(session),
        }
    }

    /// `Set-Cookie` header value carrying `session`.
    pub fn session_cookie(&self, session: &Session) -> Result<HeaderValue> {
        let value = self.codec.encode(session)?;
        Ok(self.cookie.set_cookie(&value)?)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("codec", &self.codec)
            .field("cookie", &self.cookie)
            .finish_non_exhaustive()
    }
}
