//! Unified error handling for the Asana client
//!
//! Transport failures and remote service errors are surfaced to the caller
//! unchanged; there is no retry or partial-failure handling at this layer.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for Asana client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// A single entry from an Asana error response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub phrase: Option<String>,
}

/// Error response body returned by the Asana API on 4xx/5xx
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    errors: Vec<ApiErrorDetail>,
}

/// Error type for Asana API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client configuration problem (missing token, bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure: connection, timeout, or response decoding
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Asana service rejected the request
    #[error("Asana API error ({status}): {}", first_message(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
    },
}

fn first_message(errors: &[ApiErrorDetail]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("Unknown error")
}

impl ApiError {
    /// Build an error from a non-2xx response body
    ///
    /// Falls back to the raw body text when it is not the standard
    /// `{"errors": [...]}` shape.
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.errors,
            Err(_) => vec![ApiErrorDetail {
                message: body.to_string(),
                help: None,
                phrase: None,
            }],
        };

        ApiError::Api { status, errors }
    }

    /// HTTP status code of the remote error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Config(_) => None,
        }
    }

    /// Check if the remote service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
