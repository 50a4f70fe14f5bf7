//! `placemaps show` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::model::UserMap;

/// Execute the `show` command.
///
/// `number` is 1-based, matching the `#` column of `list`.
///
/// # Errors
///
/// Returns an error string if the collection cannot be loaded or there is no
/// map with that number.
pub fn run(ctx: &ServiceContext, store_path: &Path, number: usize) -> Result<(), String> {
    let presenter = super::load_presenter(ctx, store_path)?;
    let map = number
        .checked_sub(1)
        .and_then(|index| presenter.get(index))
        .ok_or_else(|| format!("No map #{number} (there are {} saved maps)", presenter.len()))?;
    print!("{}", render(number, map));
    Ok(())
}

fn render(number: usize, map: &UserMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Map {number}: {}", map.title());
    for (i, place) in map.places().iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", i + 1, place.title(), place.position());
        let _ = writeln!(out, "     {}", place.description());
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;
    use crate::model::{LatLng, Place};
    use crate::presenter::MapListPresenter;
    use crate::store::MapCollectionStore;

    const PATH: &str = "/maps/UserMaps.json";

    fn trip() -> UserMap {
        UserMap::new(
            "Trip",
            vec![
                Place::new("Cafe", "Good coffee", LatLng::new(1.0, 2.0)).unwrap(),
                Place::new("Park", "Nice walk", LatLng::new(3.5, -4.0)).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn renders_places_in_order() {
        assert_eq!(
            render(1, &trip()),
            "Map 1: Trip\n  1. Cafe (1, 2)\n     Good coffee\n  2. Park (3.5, -4)\n     Nice walk\n"
        );
    }

    #[test]
    fn out_of_range_number_is_an_error() {
        let ctx = ServiceContext::with_fs(Arc::new(MemoryFileSystem::new()));
        let mut presenter = MapListPresenter::new(MapCollectionStore::new(&ctx, Path::new(PATH)));
        presenter.initialize().unwrap();
        presenter.append(trip()).unwrap();

        assert!(run(&ctx, Path::new(PATH), 1).is_ok());
        let err = run(&ctx, Path::new(PATH), 2).unwrap_err();
        assert!(err.contains("No map #2"));
        assert!(run(&ctx, Path::new(PATH), 0).is_err());
    }
}
