/// Convenience result type used across the crate.
pub type HalftoneResult<T> = Result<T, HalftoneError>;

/// Top-level error taxonomy used by renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum HalftoneError {
    /// Structurally unusable input (zero-sized images, mismatched pixel buffers).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid user-provided settings that cannot be clamped into range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing parameter sets.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HalftoneError {
    /// Build a [`HalftoneError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`HalftoneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HalftoneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
