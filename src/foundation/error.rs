/// Convenience result type used across Sonogrid.
pub type SonogridResult<T> = Result<T, SonogridError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SonogridError {
    /// Input that cannot be read, decoded, or sampled into frames.
    #[error("input error: {0}")]
    Input(String),

    /// Grid size the curve construction does not support.
    #[error("grid size error: {0}")]
    GridSize(String),

    /// A freshly computed traversal could not be persisted.
    #[error("path cache write error: {0}")]
    CacheWrite(String),

    /// The output audio artifact could not be produced.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Contract violation in caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SonogridError {
    /// Build a [`SonogridError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`SonogridError::GridSize`] value.
    pub fn grid_size(msg: impl Into<String>) -> Self {
        Self::GridSize(msg.into())
    }

    /// Build a [`SonogridError::CacheWrite`] value.
    pub fn cache_write(msg: impl Into<String>) -> Self {
        Self::CacheWrite(msg.into())
    }

    /// Build a [`SonogridError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`SonogridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
