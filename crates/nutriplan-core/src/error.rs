use thiserror::Error;

/// Failure talking to the meal plan service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The browser refused to save the downloaded file
    #[error("Download failed: {0}")]
    Download(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Error body the backend sends alongside a failure status
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pick the most useful message for a failed response.
///
/// Uses the backend's `{"error": "..."}` body when present, otherwise the
/// HTTP status text.
pub fn server_error_message(body: &str, status_text: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ if !status_text.is_empty() => status_text.to_string(),
        _ => "Request failed".to_string(),
    }
}
