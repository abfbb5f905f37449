//! Error types for route searches.

use gridroute_core::{MapError, Point};
use thiserror::Error;

/// Which end of a search a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors reported by a search. "No path" is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid map: {0}")]
    Map(#[from] MapError),

    #[error("{endpoint} {point} lies outside the {width}x{height} map")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("route of {needed} cells does not fit in a buffer of {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, PathError>;
