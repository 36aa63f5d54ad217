use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, malformed responses
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,
            ApiError::ClientBuild(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Short message for the dashboard. Transport errors are collapsed into a readable line
    /// instead of the full reqwest chain.
    pub fn user_message(&self, error: &ApiError) -> String {
        match error {
            ApiError::Reqwest(e) if e.is_timeout() => "Request timed out".to_string(),
            ApiError::Reqwest(e) if e.is_connect() => "Could not connect to the API".to_string(),
            ApiError::Reqwest(_) => "Network error".to_string(),
            ApiError::Http { status, .. } => format!("API answered with status {}", status),
            ApiError::Decode(e) => format!("Unexpected response from the API: {}", e),
            ApiError::ClientBuild(msg) => format!("HTTP client unavailable: {}", msg),
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
