/// Result alias that carries the custom [`GazeOverlayError`] type.
pub type Result<T> = std::result::Result<T, GazeOverlayError>;

/// Common error type for the core crate.
///
/// Nothing inside the render path itself is fatal: malformed gaze rows are
/// dropped and degenerate draws degrade to a cleared surface. The variants
/// here cover the host-facing edges: reading gaze files and decoding style
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum GazeOverlayError {
    /// Free-form error message for conditions without a richer source.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON decoding errors from style configuration.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl GazeOverlayError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for GazeOverlayError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for GazeOverlayError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
