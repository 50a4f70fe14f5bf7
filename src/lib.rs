//! Core library for `placemaps`: named maps of places, an editing session
//! for composing them, and whole-collection persistence.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod ports;
pub mod presenter;
pub mod session;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version land here but are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_lists_an_explicit_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("UserMaps.json");
        let result = run(["placemaps", "--store", store.to_str().unwrap(), "list"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["placemaps", "unknown"]);
        assert!(result.is_err());
    }
}
