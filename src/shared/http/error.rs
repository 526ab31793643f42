// src/shared/http/error.rs

/// Failure of a call to the remote portfolio API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Text shown to the user: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }
}
