//! Session cookie encoding.
//!
//! A cookie value is `payload.mac` where `payload` is the URL-safe base64
//! of a JSON envelope `{"session": .., "expires_at": ..}` and `mac` is the
//! hex keyed-BLAKE3 hash of `payload`. The key is derived from the
//! configured secret, so changing the secret invalidates every cookie.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rolodex_core::config::SessionConfig;
use serde::{Deserialize, Serialize};

use crate::{AuthError, Session};

const KEY_CONTEXT: &str = "rolodex 2024-06 session cookie signing key";

/// Turns sessions into cookie values and back.
///
/// Implement this to change how sessions are carried (signed cookie,
/// server-side store keyed by cookie, ...). The session layer calls
/// `decode()` on every request and handlers call `encode()` when they
/// change the session.
pub trait SessionCodec: Send + Sync + 'static {
    /// Encode a session into a cookie value.
    fn encode(&self, session: &Session) -> Result<String, AuthError>;

    /// Decode and verify a cookie value.
    fn decode(&self, value: &str) -> Result<Session, AuthError>;
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    session: Session,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<i64>,
}

/// Signed, client-held session cookies.
#[derive(Clone)]
pub struct SignedCookieCodec {
    key: [u8; 32],
    lifetime: Option<Duration>,
}

impl SignedCookieCodec {
    /// Create a codec signing with a key derived from `secret`.
    pub fn new(secret: &str, lifetime: Option<Duration>) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            lifetime,
        }
    }

    /// Create a codec from the `[session]` config section.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            &config.secret_key,
            config.lifetime_secs.map(Duration::from_secs),
        )
    }

    /// Encode as if the current time were `now` (unix seconds).
    pub fn encode_at(&self, session: &Session, now: i64) -> Result<String, AuthError> {
        let expires_at = self
            .lifetime
            .map(|lifetime| now.saturating_add(i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX)));
        let envelope = Envelope {
            session: session.clone(),
            expires_at,
        };
        let json = serde_json::to_vec(&envelope).map_err(|e| AuthError::Encode(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let mac = self.sign(&payload);
        Ok(format!("{payload}.{}", mac.to_hex()))
    }

    /// Decode as if the current time were `now` (unix seconds).
    pub fn decode_at(&self, value: &str, now: i64) -> Result<Session, AuthError> {
        let (payload, mac) = value
            .split_once('.')
            .ok_or_else(|| AuthError::Malformed("missing signature".to_string()))?;

        let mac = blake3::Hash::from_hex(mac)
            .map_err(|e| AuthError::Malformed(format!("bad signature encoding: {e}")))?;
        // blake3::Hash equality is constant-time
        if self.sign(payload) != mac {
            return Err(AuthError::InvalidSignature);
        }

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AuthError::Malformed(format!("bad payload encoding: {e}")))?;
        let envelope: Envelope = serde_json::from_slice(&json)
            .map_err(|e| AuthError::Malformed(format!("bad payload: {e}")))?;

        match envelope.expires_at {
            Some(expires_at) if expires_at <= now => Err(AuthError::Expired),
            _ => Ok(envelope.session),
        }
    }

    fn sign(&self, payload: &str) -> blake3::Hash {
        blake3::keyed_hash(&self.key, payload.as_bytes())
    }
}

impl SessionCodec for SignedCookieCodec {
    fn encode(&self, session: &Session) -> Result<String, AuthError> {
        self.encode_at(session, chrono::Utc::now().timestamp())
    }

    fn decode(&self, value: &str) -> Result<Session, AuthError> {
        self.decode_at(value, chrono::Utc::now().timestamp())
    }
}

impl std::fmt::Debug for SignedCookieCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedCookieCodec")
            .field("key", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}
