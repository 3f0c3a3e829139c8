//! Result type alias

use crate::error::BisError;

/// Standard Result type for BIS client operations
pub type BisResult<T> = Result<T, BisError>;
