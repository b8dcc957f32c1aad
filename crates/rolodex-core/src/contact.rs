//! The `Contact` entity.
//!
//! [`Contact`] is a stored row; [`NewContact`] is the write model used for
//! both inserts and updates. Storage backends call [`NewContact::validate`]
//! before touching any row, so a contact that fails validation never
//! reaches the table.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum length of `uname`, `fname`, `lname`, and `email`.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of `phone`.
pub const PHONE_MAX_LEN: usize = 50;

// ============================================================================
// ContactId
// ============================================================================

/// Storage-assigned primary key of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
    /// The raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Contact
// ============================================================================

/// A stored contact row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Primary key.
    pub id: ContactId,
    /// Unique user name.
    pub uname: String,
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-form notes, possibly empty.
    pub notes: String,
    /// Creation time (local, naive).
    pub timestamp: NaiveDateTime,
}

impl Contact {
    /// The write model carrying this contact's editable fields.
    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            uname: self.uname.clone(),
            fname: self.fname.clone(),
            lname: self.lname.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Displays as `"{lname}, {fname}"`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lname, self.fname)
    }
}

// ============================================================================
// NewContact
// ============================================================================

/// Editable fields of a contact, as submitted for create or update.
///
/// Missing fields deserialize as empty strings so that an incomplete form
/// surfaces as a validation error rather than a decoding error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
    /// Unique user name.
    pub uname: String,
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-form notes.
    pub notes: String,
}

impl NewContact {
    /// Create a write model with empty notes.
    pub fn new(
        uname: impl Into<String>,
        fname: impl Into<String>,
        lname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            uname: uname.into(),
            fname: fname.into(),
            lname: lname.into(),
            email: email.into(),
            phone: phone.into(),
            notes: String::new(),
        }
    }

    /// Set the notes field.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Returns a copy with surrounding whitespace trimmed from every
    /// single-line field. Notes are kept verbatim.
    pub fn trimmed(&self) -> Self {
        Self {
            uname: self.uname.trim().to_string(),
            fname: self.fname.trim().to_string(),
            lname: self.lname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            notes: self.notes.clone(),
        }
    }

    /// Check required fields and length limits.
    ///
    /// Every field except `notes` must be non-blank. `phone` is limited to
    /// [`PHONE_MAX_LEN`] characters, the other single-line fields to
    /// [`NAME_MAX_LEN`].
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("uname", self.uname.as_str(), NAME_MAX_LEN),
            ("fname", self.fname.as_str(), NAME_MAX_LEN),
            ("lname", self.lname.as_str(), NAME_MAX_LEN),
            ("email", self.email.as_str(), NAME_MAX_LEN),
            ("phone", self.phone.as_str(), PHONE_MAX_LEN),
        ];

        for (name, value, max) in fields {
            if value.trim().is_empty() {
                return Err(Error::validation_field(
                    name,
                    format!("{name} is required"),
                ));
            }
            if value.chars().count() > max {
                return Err(Error::validation_field(
                    name,
                    format!("{name} must be at most {max} characters"),
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
