//! Convenience result type alias for Moped.

use crate::error::AppError;

/// A specialized `Result` type for Moped host operations.
pub type AppResult<T> = Result<T, AppError>;
