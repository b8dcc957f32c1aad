//! Error types for rolodex-storage

use rolodex_core::ContactId;
use thiserror::Error;

/// Result type alias for rolodex-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rolodex-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from rolodex-core (validation of the submitted contact)
    #[error("Core error: {0}")]
    Core(#[from] rolodex_core::Error),

    /// Another contact already holds this `uname`
    #[error("A contact with uname '{uname}' already exists")]
    DuplicateUname {
        /// The conflicting user name
        uname: String,
    },

    /// No contact has this id
    #[error("Contact not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: ContactId,
    },

    /// Error from the SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Map a driver error from an insert or update, turning a unique
    /// constraint violation into [`Error::DuplicateUname`].
    pub(crate) fn from_write(err: sqlx::Error, uname: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return Error::DuplicateUname {
                uname: uname.to_string(),
            };
        }
        Error::Database(err)
    }

    /// Whether this is a uniqueness conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateUname { .. })
    }

    /// Whether this is a missing-row error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Whether this is a validation failure of the submitted contact.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Core(rolodex_core::Error::Validation { .. })
        )
    }
}
