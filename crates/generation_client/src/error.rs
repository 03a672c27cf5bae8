use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generation endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation stream error: {0}")]
    Stream(String),

    #[error("invalid generation response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
