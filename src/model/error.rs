//! Validation failures for user input.

use std::fmt;

/// Input rejected before it could become part of a map.
///
/// Always recoverable: the caller reports it and lets the user retry.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The map title is empty or whitespace.
    EmptyMapTitle,
    /// A marker title is empty or whitespace.
    EmptyPlaceTitle,
    /// A marker description is empty or whitespace.
    EmptyPlaceDescription,
    /// A coordinate is NaN, infinite, or outside the valid range.
    InvalidCoordinate {
        /// Offending latitude.
        latitude: f64,
        /// Offending longitude.
        longitude: f64,
    },
    /// The session has no markers to save.
    NoMarkers,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMapTitle => write!(f, "Map must have a non-empty title"),
            Self::EmptyPlaceTitle | Self::EmptyPlaceDescription => {
                write!(f, "Place must have non-empty title and description")
            }
            Self::InvalidCoordinate { latitude, longitude } => {
                write!(f, "Invalid coordinate ({latitude}, {longitude})")
            }
            Self::NoMarkers => write!(f, "There must be at least one marker on the map"),
        }
    }
}

impl std::error::Error for ValidationError {}
