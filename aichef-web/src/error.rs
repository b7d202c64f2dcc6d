//! Error types for the AIChef client.

use thiserror::Error;

/// Failures of an outbound API call. Propagated to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Text fit for the page: the server's own message for status errors.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Errors raised while rendering a route. Caught by the shell's error boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("No search query given")]
    MissingQuery,

    #[error("Navigation state does not hold a recipe: {0}")]
    CorruptState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Status {
            status: 404,
            message: "nothing".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::Network("offline".to_string()).is_not_found());
    }

    #[test]
    fn test_user_message_drops_status_code() {
        let err = ApiError::Status {
            status: 404,
            message: "No recipes for tofu".to_string(),
        };
        assert_eq!(err.user_message(), "No recipes for tofu");
        assert_eq!(
            ApiError::Network("offline".to_string()).user_message(),
            "Network error: offline"
        );
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "boom (HTTP 500)");
    }
}
