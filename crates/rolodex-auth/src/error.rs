//! Session-specific error types.

/// Errors that can occur while encoding or decoding a session cookie.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Cookie value is not `payload.signature`, or a part fails to decode.
    #[error("malformed session cookie: {0}")]
    Malformed(String),

    /// Signature does not match the payload under the configured key.
    #[error("invalid session signature")]
    InvalidSignature,

    /// Session carried an expiry that has passed.
    #[error("session has expired")]
    Expired,

    /// Session could not be serialized.
    #[error("failed to encode session: {0}")]
    Encode(String),
}

impl AuthError {
    /// Whether the client sent something we reject (vs. a server-side fault).
    ///
    /// Client errors are not surfaced: the request proceeds with an empty
    /// session.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AuthError::Malformed(_) | AuthError::InvalidSignature | AuthError::Expired
        )
    }
}
