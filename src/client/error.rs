use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A presence check failed; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}
