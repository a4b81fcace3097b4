//! Error types for host-facts operations.
//!
//! An absent `EC2_INSTANCE_TYPE` variable and an unrecognized architecture
//! identifier are designed fallbacks (placeholder text / `false`), not
//! errors, so they have no variants here.

use thiserror::Error;

/// Errors that can occur when fetching host facts.
#[derive(Debug, Error)]
pub enum FactsError {
    /// The metadata path was not found on the IMDS endpoint.
    #[error("metadata not found")]
    NotFound,

    /// HTTP error with status code.
    #[error("http {0}")]
    Http(u16),

    /// Response was not valid UTF-8.
    #[error("invalid utf-8")]
    Utf8,

    /// HTTP request error, including client-level timeouts.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FactsError::NotFound.to_string(), "metadata not found");
        assert_eq!(FactsError::Http(500).to_string(), "http 500");
        assert_eq!(FactsError::Utf8.to_string(), "invalid utf-8");
    }
}
