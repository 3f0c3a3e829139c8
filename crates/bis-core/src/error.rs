//! Core error types for the BIS API client
//!
//! Every failure is raised synchronously by the call that violated a contract.
//! Nothing here is retried or recovered internally.

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for all client-side operations
#[derive(Error, Debug)]
pub enum BisError {
    /// A builder was used in a way its contract forbids
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// A value lies outside the closed set the remote API accepts
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BisError {
    pub fn usage(message: impl Into<String>) -> Self {
        BisError::Usage {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BisError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            BisError::Usage { .. } => "usage_error",
            BisError::InvalidArgument { .. } => "invalid_argument",
            BisError::Config(_) => "configuration_error",
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, BisError::Usage { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BisError::InvalidArgument { .. })
    }
}
