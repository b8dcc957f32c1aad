//! Session primitives for Rolodex.
//!
//! Provides:
//! - [`Session`]: per-client state (`username`, `group`) carried in a cookie
//! - [`SessionCodec`]: trait for turning sessions into cookie values and back
//! - [`SignedCookieCodec`]: keyed-BLAKE3 signed, optionally expiring, cookie codec
//! - [`AuthContext`] / [`Role`]: request-scoped authorization derived from the session
//! - [`SessionLayer`] / [`SessionService`]: Tower middleware decoding the session cookie
//! - [`AdminGateLayer`] / [`AdminGateService`]: Tower middleware admitting only admins
//! - [`AuthError`]: session-specific error types

mod codec;
mod context;
mod cookie;
mod error;
mod middleware;
mod session;

pub use codec::{SessionCodec, SignedCookieCodec};
pub use context::{AuthContext, Role, context_from_parts, session_from_parts};
pub use cookie::{CookieSettings, find_cookie};
pub use error::AuthError;
pub use middleware::{AdminGateLayer, AdminGateService, SessionLayer, SessionService};
pub use session::{ADMIN_GROUP, ADMIN_USERNAME, Session};
