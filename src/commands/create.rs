//! `placemaps create` command.

use std::path::Path;

use crate::cli::MarkerSpec;
use crate::context::ServiceContext;
use crate::session::{CommandOutcome, MapEditingSession, MarkerHandle, SessionCommand};

/// Execute the `create` command.
///
/// Replays the markers and removals as session commands, saves the result,
/// and returns the 0-based index the map was inserted at.
///
/// # Errors
///
/// Returns an error string if the title or a marker is invalid, a removal
/// names a marker that was never added, no markers survive, or the
/// collection cannot be loaded or saved.
pub fn run(
    ctx: &ServiceContext,
    store_path: &Path,
    title: &str,
    markers: &[MarkerSpec],
    remove: &[usize],
) -> Result<usize, String> {
    let mut presenter = super::load_presenter(ctx, store_path)?;

    let mut session = MapEditingSession::open(title).map_err(|e| e.to_string())?;
    let mut handles: Vec<MarkerHandle> = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let outcome = session
            .apply(SessionCommand::AddMarker {
                position: marker.position,
                title: marker.title.clone(),
                description: marker.description.clone(),
            })
            .map_err(|e| format!("Marker #{}: {e}", i + 1))?;
        if let CommandOutcome::Added(handle) = outcome {
            handles.push(handle);
        }
    }
    for &number in remove {
        let handle = number
            .checked_sub(1)
            .and_then(|i| handles.get(i))
            .ok_or_else(|| format!("No marker #{number} to remove"))?;
        session.apply(SessionCommand::RemoveMarker(*handle)).map_err(|e| e.to_string())?;
    }

    let map = session.finalize().map_err(|e| e.to_string())?;
    let places = map.len();
    let index = presenter.append(map).map_err(|e| e.to_string())?;
    println!("Saved \"{title}\" as map #{} with {places} places.", index + 1);
    Ok(index)
}
