//! Error types for grid geometry validation.

use thiserror::Error;

/// Reasons a passability grid is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("grid dimensions {width}x{height} overflow the addressable cell count")]
    TooLarge { width: usize, height: usize },

    #[error("grid has {actual} cells, expected {expected} for its dimensions")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, MapError>;
