/// Convenience result type used across the crate.
pub type RadarResult<T> = Result<T, RadarError>;

/// Top-level error taxonomy for the fallible surfaces (models, rendering, encoding).
///
/// Chart geometry and animation sequencing never fail: degenerate input is handled as a no-op.
#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    /// Invalid user-provided model or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a chart snapshot.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing chart models.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RadarError {
    /// Build a [`RadarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RadarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RadarError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RadarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
