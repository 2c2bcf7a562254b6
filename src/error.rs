use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GradError>;

#[derive(Debug, Error)]
pub enum GradError {
    /// Feature and target vectors must pair up one-to-one.
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// The mean over zero samples is undefined.
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
