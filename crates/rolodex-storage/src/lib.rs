//! # rolodex-storage
//!
//! Contact storage for Rolodex.
//!
//! This crate provides:
//! - [`Database`]: the shared SQLite pool, opened once and passed to handlers
//! - [`ContactRepository`]: the CRUD interface the HTTP layer is written against
//! - [`SqliteContactRepository`] and [`MemoryContactRepository`] implementations
//! - [`seed_sample_contacts`]: the startup seed routine

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod database;
pub mod error;
pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod traits;

pub use database::Database;
pub use error::{Error, Result};
pub use memory::MemoryContactRepository;
pub use seed::{SeedReport, sample_contacts, seed_sample_contacts};
pub use sqlite::SqliteContactRepository;
pub use traits::ContactRepository;
