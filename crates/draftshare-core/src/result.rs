//! Convenience result type alias for DraftShare.

use crate::error::AppError;

/// A specialized `Result` type for DraftShare operations.
pub type AppResult<T> = Result<T, AppError>;
