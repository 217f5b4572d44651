//! Error types for game-data-core.

use thiserror::Error;

/// Result type alias using GameDataError.
pub type Result<T> = std::result::Result<T, GameDataError>;

/// Errors surfaced while loading, validating, or writing game data files.
///
/// The granularity is intentionally coarse: a malformed block is always
/// `InvalidDataFormat`, whatever went wrong inside it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameDataError {
    #[error("data file not found: {0}")]
    MissingDataFile(String),

    #[error("invalid data format: {0}")]
    InvalidDataFormat(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl GameDataError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidDataFormat(detail.into())
    }

    /// Detail text carried by the error, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::MissingDataFile(s) | Self::InvalidDataFormat(s) | Self::CorruptedData(s) => s,
        }
    }
}
