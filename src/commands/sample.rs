//! `placemaps sample` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::sample_maps;

/// Execute the `sample` command: append the built-in demo maps.
///
/// Returns how many maps were added.
///
/// # Errors
///
/// Returns an error string if the collection cannot be loaded or saved.
pub fn run(ctx: &ServiceContext, store_path: &Path) -> Result<usize, String> {
    let mut presenter = super::load_presenter(ctx, store_path)?;
    let samples = sample_maps().map_err(|e| e.to_string())?;
    let count = presenter.append_all(samples).map_err(|e| e.to_string())?.len();
    println!("Added {count} sample maps ({} total).", presenter.len());
    Ok(count)
}
