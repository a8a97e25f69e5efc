//! Domain-specific error types and error handling.

mod send_error;

// Re-export all error types and utilities
pub use send_error::SendError;

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Repository implementations return these; the notification services
/// convert them into dispatch outcomes at the public boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
