//! Map store: whole-collection persistence in a single JSON file.
//!
//! Every save rewrites the entire collection. The new document is written to
//! a sibling temp file and renamed over the old one, so the previous good
//! file survives a failed or interrupted write. All I/O goes through the
//! `FileSystem` port.
//!
//! ```text
//! <data dir>/
//!   ├── UserMaps.json
//!   └── UserMaps.json.tmp   (only while a save is in flight)
//! ```

mod error;
mod schema;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub use error::StorageError;
pub use schema::CURRENT_VERSION;

use crate::context::ServiceContext;
use crate::model::UserMap;
use schema::{CollectionDocument, VersionProbe};

/// Default collection file name.
pub const DEFAULT_FILE_NAME: &str = "UserMaps.json";

/// Load/save access to the full, ordered collection of saved maps.
pub trait CollectionStore {
    /// Loads every saved map. A store that was never written is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if saved data exists but cannot be read
    /// back intact.
    fn load_all(&self) -> Result<Vec<UserMap>, StorageError>;

    /// Replaces the saved collection with `maps`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the collection cannot be written; the
    /// previously saved collection is left in place.
    fn save_all(&self, maps: &[UserMap]) -> Result<(), StorageError>;
}

/// File-backed [`CollectionStore`].
pub struct MapCollectionStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> MapCollectionStore<'a> {
    /// Creates a store for the collection file at `path`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// The collection file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name =
            self.path.file_name().map_or_else(|| OsString::from(DEFAULT_FILE_NAME), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn decode(&self, contents: &str) -> Result<Vec<UserMap>, StorageError> {
        let probe: VersionProbe = serde_json::from_str(contents)
            .map_err(|source| StorageError::Decode { path: self.path.clone(), source })?;
        if probe.version != CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                path: self.path.clone(),
                found: probe.version,
            });
        }

        let document: CollectionDocument = serde_json::from_str(contents)
            .map_err(|source| StorageError::Decode { path: self.path.clone(), source })?;
        document
            .maps
            .into_iter()
            .enumerate()
            .map(|(map_index, record)| {
                UserMap::try_from(record).map_err(|source| StorageError::InvalidData {
                    path: self.path.clone(),
                    map_index,
                    source,
                })
            })
            .collect()
    }

    fn discard_temp(&self, temp: &Path) {
        if let Err(err) = self.ctx.fs.remove_file(temp) {
            warn!(path = %temp.display(), %err, "could not remove temp file");
        }
    }
}

impl CollectionStore for MapCollectionStore<'_> {
    fn load_all(&self) -> Result<Vec<UserMap>, StorageError> {
        if !self.ctx.fs.exists(&self.path) {
            info!(path = %self.path.display(), "no saved maps yet");
            return Ok(Vec::new());
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&self.path)
            .map_err(|source| StorageError::Read { path: self.path.clone(), source })?;
        let maps = self.decode(&contents)?;
        info!(path = %self.path.display(), count = maps.len(), "loaded maps");
        Ok(maps)
    }

    fn save_all(&self, maps: &[UserMap]) -> Result<(), StorageError> {
        let document = CollectionDocument::new(maps, self.ctx.clock.now());
        let json = serde_json::to_string_pretty(&document)
            .map_err(|source| StorageError::Encode { path: self.path.clone(), source })?;

        let temp = self.temp_path();
        if let Err(source) = self.ctx.fs.write(&temp, &json) {
            self.discard_temp(&temp);
            return Err(StorageError::Write { path: temp, source });
        }
        if let Err(source) = self.ctx.fs.rename(&temp, &self.path) {
            self.discard_temp(&temp);
            return Err(StorageError::Write { path: self.path.clone(), source });
        }
        info!(path = %self.path.display(), count = maps.len(), "saved maps");
        Ok(())
    }
}
