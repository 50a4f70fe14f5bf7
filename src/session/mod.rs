//! Editing session for one new map.
//!
//! A [`MapEditingSession`] collects pending markers while the user composes
//! a map, then turns the survivors into a [`UserMap`]. Markers are stored
//! in an arena keyed by [`MarkerHandle`]; handles come from a counter that
//! only grows, so iteration order is add order and removing one marker never
//! disturbs the others.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::model::{LatLng, Place, UserMap, ValidationError};

/// Opaque identifier for a pending marker within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerHandle(u64);

impl fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// A user action on the map being composed.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Long-press on the map followed by a confirmed marker dialog.
    AddMarker {
        /// Where the user pressed.
        position: LatLng,
        /// Dialog title field.
        title: String,
        /// Dialog description field.
        description: String,
    },
    /// Tap on a marker's label.
    RemoveMarker(MarkerHandle),
}

/// What applying a [`SessionCommand`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A marker was added under this handle.
    Added(MarkerHandle),
    /// `true` if a marker was removed, `false` if the handle was unknown.
    Removed(bool),
}

/// Pending markers for one not-yet-saved map.
#[derive(Debug, Clone)]
pub struct MapEditingSession {
    title: String,
    next_handle: u64,
    pending: BTreeMap<MarkerHandle, Place>,
}

impl MapEditingSession {
    /// Opens a session for a map with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMapTitle`] if the title is blank.
    pub fn open(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            warn!("rejected blank map title");
            return Err(ValidationError::EmptyMapTitle);
        }
        Ok(Self { title, next_handle: 0, pending: BTreeMap::new() })
    }

    /// The title the map will be saved under.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Adds a marker and returns its handle.
    ///
    /// Rejected input leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the title or description is blank or
    /// the position is invalid.
    pub fn add_marker(
        &mut self,
        position: LatLng,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<MarkerHandle, ValidationError> {
        let place = Place::new(title, description, position).inspect_err(|err| {
            warn!(%err, "rejected marker");
        })?;
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        debug!(%handle, title = place.title(), %position, "marker added");
        self.pending.insert(handle, place);
        Ok(handle)
    }

    /// Removes a marker. Unknown or already-removed handles are ignored.
    ///
    /// Returns `true` if a marker was removed.
    pub fn remove_marker(&mut self, handle: MarkerHandle) -> bool {
        let removed = self.pending.remove(&handle).is_some();
        debug!(%handle, removed, "marker remove requested");
        removed
    }

    /// Applies one user action.
    ///
    /// # Errors
    ///
    /// Propagates the [`ValidationError`] from [`Self::add_marker`].
    pub fn apply(&mut self, command: SessionCommand) -> Result<CommandOutcome, ValidationError> {
        match command {
            SessionCommand::AddMarker { position, title, description } => {
                self.add_marker(position, title, description).map(CommandOutcome::Added)
            }
            SessionCommand::RemoveMarker(handle) => {
                Ok(CommandOutcome::Removed(self.remove_marker(handle)))
            }
        }
    }

    /// Pending markers in the order they were added.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerHandle, &Place)> {
        self.pending.iter().map(|(handle, place)| (*handle, place))
    }

    /// Looks up a pending marker.
    #[must_use]
    pub fn marker(&self, handle: MarkerHandle) -> Option<&Place> {
        self.pending.get(&handle)
    }

    /// Number of pending markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no markers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Builds the map from the surviving markers.
    ///
    /// The session is only borrowed; on failure the user can keep editing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoMarkers`] if nothing is pending.
    pub fn finalize(&self) -> Result<UserMap, ValidationError> {
        if self.pending.is_empty() {
            warn!(title = %self.title, "cannot save a map without markers");
            return Err(ValidationError::NoMarkers);
        }
        UserMap::new(self.title.clone(), self.pending.values().cloned().collect())
    }
}
