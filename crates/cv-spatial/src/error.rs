//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced while building spatial structures.
///
/// Queries never fail: a missed snap or a blocked sightline is an ordinary
/// result, not an error.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("walkable region has non-finite or inverted bounds")]
    InvalidRegion,

    #[error("obstacle has non-finite or inverted bounds")]
    InvalidObstacle,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
