//! `placemaps list` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::model::UserMap;

/// Execute the `list` command.
///
/// Prints one row per saved map: its number, title, and place count.
///
/// # Errors
///
/// Returns an error string if the collection cannot be loaded.
pub fn run(ctx: &ServiceContext, store_path: &Path) -> Result<(), String> {
    let presenter = super::load_presenter(ctx, store_path)?;
    print!("{}", render(presenter.maps()));
    Ok(())
}

fn render(maps: &[UserMap]) -> String {
    if maps.is_empty() {
        return "No maps saved yet.\n".to_string();
    }

    let rows: Vec<(String, &str, String)> = maps
        .iter()
        .enumerate()
        .map(|(i, map)| ((i + 1).to_string(), map.title(), map.len().to_string()))
        .collect();

    let num_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(1).max(1);
    let title_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    let _ = writeln!(out, "{:<num_width$}  {:<title_width$}  PLACES", "#", "TITLE");
    let _ = writeln!(out, "{:-<num_width$}  {:-<title_width$}  ------", "", "");
    for (num, title, places) in rows {
        let _ = writeln!(out, "{num:<num_width$}  {title:<title_width$}  {places}");
    }
    out
}
