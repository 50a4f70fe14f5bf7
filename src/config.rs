//! Where the collection file lives.
//!
//! Resolution order, first match wins:
//! - `--store <PATH>` on the command line
//! - `PLACEMAPS_STORE` (also read from a `.env` file in the working directory)
//! - Linux: `~/.local/share/placemaps/UserMaps.json`
//! - Windows: `%APPDATA%\placemaps\UserMaps.json`
//! - macOS: `~/Library/Application Support/placemaps/UserMaps.json`
//! - `./UserMaps.json` when the platform has no data directory

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::DEFAULT_FILE_NAME;

/// Environment variable overriding the collection file path.
pub const STORE_ENV: &str = "PLACEMAPS_STORE";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the collection file.
    pub store_path: PathBuf,
}

impl AppConfig {
    /// Resolves settings from the CLI flag, environment, and platform dirs.
    ///
    /// A `.env` file is loaded first; it never overrides variables that are
    /// already set.
    #[must_use]
    pub fn resolve(store_flag: Option<&Path>) -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        let store_env = std::env::var_os(STORE_ENV).map(PathBuf::from);
        let config = Self::from_sources(store_flag, store_env, dirs::data_dir());
        debug!(store = %config.store_path.display(), "resolved store path");
        config
    }

    fn from_sources(
        store_flag: Option<&Path>,
        store_env: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let store_path = store_flag
            .map(Path::to_path_buf)
            .or(store_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| data_dir.map(|dir| dir.join("placemaps").join(DEFAULT_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
        Self { store_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_everything() {
        let config = AppConfig::from_sources(
            Some(Path::new("/flag.json")),
            Some(PathBuf::from("/env.json")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(config.store_path, PathBuf::from("/flag.json"));
    }

    #[test]
    fn env_wins_over_data_dir() {
        let config = AppConfig::from_sources(
            None,
            Some(PathBuf::from("/env.json")),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(config.store_path, PathBuf::from("/env.json"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let config =
            AppConfig::from_sources(None, Some(PathBuf::new()), Some(PathBuf::from("/data")));
        assert_eq!(config.store_path, PathBuf::from("/data/placemaps/UserMaps.json"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        let config = AppConfig::from_sources(None, None, None);
        assert_eq!(config.store_path, PathBuf::from("UserMaps.json"));
    }
}
