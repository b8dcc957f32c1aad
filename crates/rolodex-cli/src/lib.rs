//! # rolodex-cli
//!
//! Command-line front end for Rolodex.
//!
//! This crate provides:
//! - Argument parsing for the `rolodex` binary
//! - Database commands (`serve`, `init-db`, `seed`, `list`)
//! - Configuration file management (`config path|init|get|show`)
//! - Logging setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Args, Command, ConfigAction};
pub use error::{Error, Result};
