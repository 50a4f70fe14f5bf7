//! A named, ordered collection of places.

use super::error::ValidationError;
use super::place::Place;

/// A saved map. Immutable once built: only read accessors are exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMap {
    title: String,
    places: Vec<Place>,
}

impl UserMap {
    /// Builds a map from a title and at least one place.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMapTitle`] for a blank title and
    /// [`ValidationError::NoMarkers`] when `places` is empty.
    pub fn new(title: impl Into<String>, places: Vec<Place>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyMapTitle);
        }
        if places.is_empty() {
            return Err(ValidationError::NoMarkers);
        }
        Ok(Self { title, places })
    }

    /// The map's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Places in the order they were added.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatLng;

    fn cafe() -> Place {
        Place::new("Cafe", "Good coffee", LatLng::new(1.0, 2.0)).unwrap()
    }

    #[test]
    fn requires_at_least_one_place() {
        assert_eq!(UserMap::new("Trip", Vec::new()).unwrap_err(), ValidationError::NoMarkers);
    }

    #[test]
    fn requires_a_title() {
        assert_eq!(UserMap::new(" ", vec![cafe()]).unwrap_err(), ValidationError::EmptyMapTitle);
    }

    #[test]
    fn exposes_places_in_order() {
        let park = Place::new("Park", "Nice walk", LatLng::new(3.0, 4.0)).unwrap();
        let map = UserMap::new("Trip", vec![cafe(), park.clone()]).unwrap();

        assert_eq!(map.title(), "Trip");
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.places()[1], park);
    }
}
