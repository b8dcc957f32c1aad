//! Rolodex Core: shared types, validation, errors, and configuration.
//!
//! This crate provides the foundational types used across all Rolodex crates.
//! It has no internal Rolodex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`contact`]: The `Contact` entity and its write model
//! - [`config`]: `RolodexConfig` and its TOML loading rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::RolodexConfig;
pub use contact::{Contact, ContactId, NewContact};
pub use error::{Error, Result};
