/// Convenience result type used across the crate.
pub type DemoResult<T> = Result<T, DemoError>;

/// Top-level error taxonomy for demo rendering and cast conversion.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Inconsistent inputs, e.g. frames of differing sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors while reading a terminal-session recording.
    #[error("cast error: {0}")]
    Cast(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DemoError {
    /// Build a [`DemoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DemoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DemoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`DemoError::Cast`] value.
    pub fn cast(msg: impl Into<String>) -> Self {
        Self::Cast(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
