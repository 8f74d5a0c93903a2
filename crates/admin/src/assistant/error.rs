//! Error types for the metadata assistant.

use thiserror::Error;

/// Errors that can occur while asking the AI service for metadata.
///
/// None of these reach the user: callers swap in the fallback metadata.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key is configured.
    #[error("no API key configured")]
    MissingCredential,

    /// API key cannot be sent as a header value.
    #[error("API key contains characters not allowed in a header")]
    InvalidCredential,

    /// Endpoint URL could not be built.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The response carried no text.
    #[error("response contained no candidates")]
    EmptyResponse,

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response from Gemini.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// HTTP status code echoed by the API.
    pub code: u16,
    /// Error message.
    pub message: String,
    /// Canonical status name (e.g. `INVALID_ARGUMENT`).
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_error_display() {
        let err = AssistantError::RateLimited(30);
        assert_eq!(err.to_string(), "rate limited, retry after 30 seconds");

        let err = AssistantError::Api {
            status: 400,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "API error (400): API key not valid");
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.code, 400);
        assert_eq!(response.error.status.as_deref(), Some("INVALID_ARGUMENT"));
        assert!(response.error.message.starts_with("API key not valid"));
    }
}
