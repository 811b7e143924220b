// src/error.rs - Error handling for the storefront client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Failure taxonomy for a client that only talks to one REST backend.
///
/// `Network` covers transport failures and unexpected server statuses,
/// `Authentication` is a 401, `Rejected` is a 400/403 business-rule refusal,
/// and `Validation` never left the client at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Network {
        status_code: Option<u16>,
        endpoint: Option<String>,
    },
    Authentication {
        reason: String,
    },
    Rejected {
        endpoint: Option<String>,
        reason: String,
    },
    NotFound {
        resource: Option<String>,
    },
    Validation {
        field: Option<String>,
        rules: Vec<String>,
    },
    Serialization,
    Timeout,
    Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub correlation_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub metadata: crate::types::Metadata,
    pub backtrace: Option<String>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            correlation_id: None,
            timestamp: Utc::now(),
            metadata: std::collections::HashMap::new(),
            backtrace: Self::capture_backtrace(),
            causes: Vec::new(),
        }
    }

    /// Capture backtrace if available on the platform
    fn capture_backtrace() -> Option<String> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(std::backtrace::Backtrace::capture().to_string())
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the correlation ID
    pub fn correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Adds metadata to the error
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Checks if the error is critical
    pub fn is_critical(&self) -> bool {
        matches!(self.severity, ErrorSeverity::Critical)
    }

    /// Whether retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Network { .. } | ErrorKind::Timeout | ErrorKind::NotFound { .. }
        )
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a network/transport error
    pub fn network(
        status_code: Option<u16>,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Network {
                status_code,
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates an authentication error (backend said 401)
    pub fn authentication(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self::new(ErrorKind::Authentication { reason: msg.clone() }, msg)
            .severity(ErrorSeverity::High)
    }

    /// Creates a business-rule rejection (backend said 400/403)
    pub fn rejected(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(
            ErrorKind::Rejected {
                endpoint: Some(endpoint.into()),
                reason: reason.clone(),
            },
            reason,
        )
    }

    /// Creates a not-found error
    pub fn not_found(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::NotFound {
                resource: Some(resource.into()),
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }

    /// Creates a client-side validation error; the request was never issued
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
                rules: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Creates a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Short message suitable for direct display to the user.
    ///
    /// Distinguishes "please log in" from "action rejected" from "try again",
    /// which is the minimum a mutation failure must surface.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ErrorKind::Authentication { .. } => "Please log in to continue.".to_string(),
            ErrorKind::Rejected { reason, .. } => {
                if reason.is_empty() {
                    "That action was rejected.".to_string()
                } else {
                    reason.clone()
                }
            }
            ErrorKind::Validation { .. } => self.message.clone(),
            ErrorKind::Network { .. } | ErrorKind::Timeout | ErrorKind::NotFound { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
            _ => "An unexpected error occurred.".to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let msg = err.to_string();

        let mut error = Error::new(ErrorKind::Application, msg);
        error.source = "std::io::Error".to_string();
        error.severity = ErrorSeverity::High;

        error
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string()).source("serde_json")
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Sets the error source
    fn with_source(self, source: impl Into<String>) -> Result<T>;

    /// Sets the correlation ID
    fn with_correlation(self, correlation_id: Uuid) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::new(ErrorKind::Application, f()).caused_by(e))
    }

    fn with_source(self, source: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            Error::new(ErrorKind::Application, e.to_string())
                .source(source)
                .caused_by(e)
        })
    }

    fn with_correlation(self, correlation_id: Uuid) -> Result<T> {
        self.map_err(|e| {
            Error::new(ErrorKind::Application, e.to_string())
                .correlation_id(correlation_id)
                .caused_by(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("Invalid configuration value")
            .source("config")
            .metadata("key", serde_json::Value::String("api.base_url".to_string()));

        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(error.source, "config");
        assert!(matches!(error.kind, ErrorKind::Configuration { .. }));
        assert!(error.metadata.contains_key("key"));
    }

    #[test]
    fn test_user_message_taxonomy() {
        let auth = Error::authentication("session expired");
        assert_eq!(auth.user_message(), "Please log in to continue.");

        let rejected = Error::rejected("/cart/addItem/p1", "Insufficient stock");
        assert_eq!(rejected.user_message(), "Insufficient stock");

        let network = Error::network(None, "/product/fetchProducts", "connection refused");
        assert_eq!(
            network.user_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_retryable() {
        assert!(Error::timeout("10s elapsed").is_retryable());
        assert!(Error::network(Some(502), "/cart/getItems", "bad gateway").is_retryable());
        assert!(!Error::authentication("no session").is_retryable());
        assert!(!Error::validation("size", "Please select a size").is_retryable());
    }

    #[test]
    fn test_validation_error_blocks_with_own_message() {
        let error = Error::validation("size", "Please select a size first");
        assert_eq!(error.severity, ErrorSeverity::Low);
        assert_eq!(error.user_message(), "Please select a size first");
    }
}
