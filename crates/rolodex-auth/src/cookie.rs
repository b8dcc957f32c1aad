//! Cookie header parsing and `Set-Cookie` construction.

use http::{HeaderMap, HeaderValue, header};
use rolodex_core::config::SessionConfig;

use crate::AuthError;

/// Attributes of the session cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieSettings {
    /// Cookie name.
    pub name: String,
    /// `Max-Age` in seconds; `None` for a browser-session cookie.
    pub max_age: Option<u64>,
    /// Add the `Secure` attribute.
    pub secure: bool,
}

impl CookieSettings {
    /// Settings from the `[session]` config section.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age: config.lifetime_secs,
            secure: config.secure,
        }
    }

    /// The session cookie value in `headers`, if present.
    pub fn read<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        find_cookie(headers, &self.name)
    }

    /// Build a `Set-Cookie` header carrying `value`.
    pub fn set_cookie(&self, value: &str) -> Result<HeaderValue, AuthError> {
        let mut cookie = format!("{}={value}; Path=/; HttpOnly; SameSite=Lax", self.name);
        if let Some(max_age) = self.max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).map_err(|e| AuthError::Encode(e.to_string()))
    }
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

/// Find a cookie by name across every `Cookie` header.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
