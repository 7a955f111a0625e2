use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// No usable step can be derived from the supplied range and extents.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ScaleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
