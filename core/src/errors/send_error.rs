//! Dispatch failure taxonomy for the SMS services.
//!
//! Send failures never cross the public service boundary as errors: the
//! service converts them into structured results (or booleans for the
//! event builders) and owns the logging. The taxonomy lets internal code
//! use `?` while the conversion point picks log level and message shape
//! per kind.

use thiserror::Error;

use crate::errors::DomainError;

/// Reasons a dispatch attempt did not hand a message to the transport
#[derive(Error, Debug)]
pub enum SendError {
    /// Business missing, settings absent, or required credentials empty.
    /// A normal business state, logged at debug level only.
    #[error("SMS not configured for this business")]
    Unconfigured,

    /// Business or contact data could not be resolved
    #[error("lookup failed: {detail}")]
    LookupFailed { detail: String },

    /// The transport collaborator reported a delivery failure
    #[error("{detail}")]
    TransportFailed { detail: String },
}

impl SendError {
    /// Build a lookup failure from any displayable detail
    pub fn lookup(detail: impl Into<String>) -> Self {
        Self::LookupFailed {
            detail: detail.into(),
        }
    }

    /// Build a transport failure from the transport's error string
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::TransportFailed {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for SendError {
    fn from(err: DomainError) -> Self {
        Self::LookupFailed {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_message_is_exact() {
        assert_eq!(
            SendError::Unconfigured.to_string(),
            "SMS not configured for this business"
        );
    }

    #[test]
    fn test_transport_failure_preserves_detail() {
        let err = SendError::transport("gateway timeout");
        assert_eq!(err.to_string(), "gateway timeout");
    }

    #[test]
    fn test_domain_error_converts_to_lookup_failure() {
        let err: SendError = DomainError::Internal {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, SendError::LookupFailed { .. }));
        assert!(err.to_string().contains("connection refused"));
    }
}
