/// Crate-wide result alias.
pub type BumperResult<T> = Result<T, BumperError>;

/// Errors raised at the fallible edges of the crate (configuration, registry, sessions, sinks).
///
/// Frame evaluation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum BumperError {
    /// A value or argument violates an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be parsed or is out of range.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization to or from JSON failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BumperError {
    /// Build a [`BumperError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BumperError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BumperError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`BumperError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
