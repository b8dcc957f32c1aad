//! Error types for rolodex-cli

use thiserror::Error;

/// Result type alias for rolodex-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rolodex-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from rolodex-core
    #[error(transparent)]
    Core(#[from] rolodex_core::Error),

    /// Error from rolodex-storage
    #[error(transparent)]
    Storage(#[from] rolodex_storage::Error),

    /// Error from rolodex-api
    #[error(transparent)]
    Api(#[from] rolodex_api::Error),
}
