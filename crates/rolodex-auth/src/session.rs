//! Per-client session state.

use serde::{Deserialize, Serialize};

/// Group value that grants access to the admin area.
pub const ADMIN_GROUP: &str = "admin";

/// Username recorded by the login route.
pub const ADMIN_USERNAME: &str = "admin";

/// Session fields carried in the session cookie.
///
/// An absent cookie, or one that fails to decode, yields
/// `Session::default()`: both fields absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Logged-in user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Group attribute checked by the admin gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Session {
    /// Mark the session as the admin user. No credentials are checked.
    pub fn log_in_admin(&mut self) {
        self.username = Some(ADMIN_USERNAME.to_string());
        self.group = Some(ADMIN_GROUP.to_string());
    }

    /// Clear both fields.
    pub fn log_out(&mut self) {
        self.username = None;
        self.group = None;
    }

    /// Whether neither field is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.group.is_none()
    }
}
