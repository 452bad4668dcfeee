use contracts::shared::ErrorBody;
use thiserror::Error;

/// Text shown when the backend gave no usable message
pub const SERVER_ERROR: &str = "Server error!";

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response carrying a `message`
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// Non-2xx response without a usable message
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response by its body text
    pub fn from_response(status: u16, body: &str) -> Self {
        match ErrorBody::parse(body)
            .as_ref()
            .and_then(ErrorBody::usable_message)
        {
            Some(message) => ApiError::Server {
                status,
                message: message.to_string(),
            },
            None => ApiError::Status { status },
        }
    }

    /// Message for the flash area: the server's text verbatim when there is
    /// one, otherwise the generic error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            _ => SERVER_ERROR.to_string(),
        }
    }
}
