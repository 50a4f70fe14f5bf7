//! Command dispatch and handlers.

pub mod create;
pub mod list;
pub mod sample;
pub mod show;

use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::presenter::MapListPresenter;
use crate::store::MapCollectionStore;

/// Dispatch a parsed command line to its handler against the live filesystem.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = AppConfig::resolve(cli.store.as_deref());
    let ctx = ServiceContext::live();
    dispatch_with_context(&cli.command, &ctx, &config.store_path)
}

/// Dispatch a command with the given service context and collection file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    store_path: &Path,
) -> Result<(), String> {
    match command {
        Command::List => list::run(ctx, store_path),
        Command::Show { index } => show::run(ctx, store_path, *index),
        Command::Create { title, markers, remove } => {
            create::run(ctx, store_path, title, markers, remove).map(|_| ())
        }
        Command::Sample => sample::run(ctx, store_path).map(|_| ()),
    }
}

/// Builds a presenter over the collection file and loads it.
fn load_presenter<'a>(
    ctx: &'a ServiceContext,
    store_path: &Path,
) -> Result<MapListPresenter<MapCollectionStore<'a>>, String> {
    let mut presenter = MapListPresenter::new(MapCollectionStore::new(ctx, store_path));
    presenter.initialize().map_err(|e| e.to_string())?;
    Ok(presenter)
}
