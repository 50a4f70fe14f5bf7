//! A single marker's finalized content and position.

use std::fmt;

use super::error::ValidationError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Degrees north, in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees east, in `[-180, 180]`.
    pub longitude: f64,
}

impl LatLng {
    /// Creates a position without validating it.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns `true` if both components are finite and in range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// An immutable marker: title, description, and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    title: String,
    description: String,
    position: LatLng,
}

impl Place {
    /// Builds a place, rejecting blank text and invalid coordinates.
    ///
    /// Text is kept exactly as entered; only emptiness is judged on the
    /// trimmed form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the title or description is blank,
    /// or the position is not a valid coordinate.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        position: LatLng,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyPlaceTitle);
        }
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyPlaceDescription);
        }
        if !position.is_valid() {
            return Err(ValidationError::InvalidCoordinate {
                latitude: position.latitude,
                longitude: position.longitude,
            });
        }
        Ok(Self { title, description, position })
    }

    /// The marker title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The marker description (the map SDK's "snippet").
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the marker sits.
    #[must_use]
    pub fn position(&self) -> LatLng {
        self.position
    }

    /// Shorthand for `position().latitude`.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    /// Shorthand for `position().longitude`.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }
}
