//! # rolodex-api
//!
//! HTTP server for Rolodex.
//!
//! This crate provides:
//! - Page routes (`/`, `/home`, `/list`)
//! - Session routes (`/login`, `/logout`)
//! - The admin contact editor under `/admin`, behind the admin gate
//! - HTML rendering helpers and HTTP error mapping
//! - [`Server`]: bootstrap (schema, seed) and the listener loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod html;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::{App, router};
pub use server::Server;
pub use state::AppState;
