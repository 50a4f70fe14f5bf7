//! Errors raised while reading or writing the collection file.

use std::fmt;
use std::path::PathBuf;

use crate::model::ValidationError;

type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to load or save the map collection.
///
/// A missing file is not an error; everything here means the user's data
/// could not be read back or written out intact.
#[derive(Debug)]
pub enum StorageError {
    /// The file exists but could not be read.
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// The new contents could not be written or moved into place.
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying filesystem error.
        source: PortError,
    },
    /// The collection could not be serialized.
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Serializer error.
        source: serde_json::Error,
    },
    /// The file is not a valid collection document.
    Decode {
        /// File that failed.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },
    /// The file was written by a newer (or unknown) format version.
    UnsupportedVersion {
        /// File that failed.
        path: PathBuf,
        /// Version number found in the file.
        found: u32,
    },
    /// The file decoded but a map in it breaks a model invariant.
    InvalidData {
        /// File that failed.
        path: PathBuf,
        /// Zero-based position of the offending map.
        map_index: usize,
        /// The broken invariant.
        source: ValidationError,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read maps from {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to save maps to {}: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "Failed to encode maps for {}: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Saved maps in {} are corrupt: {source}", path.display())
            }
            Self::UnsupportedVersion { path, found } => write!(
                f,
                "Saved maps in {} use unsupported format version {found}",
                path.display()
            ),
            Self::InvalidData { path, map_index, source } => write!(
                f,
                "Saved map #{map_index} in {} is invalid: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(&**source),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
            Self::InvalidData { source, .. } => Some(source),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}
