/// Convenience result type used across jetframe.
pub type JetframeResult<T> = Result<T, JetframeError>;

/// Top-level error taxonomy used by compositor and frame-loop APIs.
#[derive(thiserror::Error, Debug)]
pub enum JetframeError {
    /// An image could not be loaded: missing path, unreadable file, or undecodable container.
    #[error("load error: {0}")]
    Load(String),

    /// `present` was called before a display surface was bound.
    #[error("no display surface bound")]
    NotBound,

    /// Invalid caller-provided data (buffer sizes, configuration values).
    #[error("validation error: {0}")]
    Validation(String),

    /// A surface failed to accept a presented frame.
    #[error("present error: {0}")]
    Present(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JetframeError {
    /// Build a [`JetframeError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`JetframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`JetframeError::Present`] value.
    pub fn present(msg: impl Into<String>) -> Self {
        Self::Present(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
