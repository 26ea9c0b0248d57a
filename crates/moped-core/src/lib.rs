//! # moped-core
//!
//! Core crate for the Moped plugin host. Contains the configuration schema
//! and the unified error system shared by the host binary and the plugin
//! crates.
//!
//! This crate has **no** internal dependencies on other Moped crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
