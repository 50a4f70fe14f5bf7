//! Service context bundling the port trait objects.

use std::sync::Arc;

use crate::adapters::live::clock::SystemClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::memory::{FixedClock, MemoryFileSystem};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects the store needs.
///
/// Ports are reference-counted so a test can keep a typed handle on the
/// adapter (for example to inspect a [`MemoryFileSystem`]) while the
/// context owns a trait-object clone.
#[derive(Clone)]
pub struct ServiceContext {
    /// Clock for stamping saved documents.
    pub clock: Arc<dyn Clock>,
    /// Filesystem for reading and writing the collection file.
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context over the real disk and system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Arc::new(SystemClock), fs: Arc::new(LiveFileSystem) }
    }

    /// Creates a context over an empty in-memory filesystem and a fixed clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_fs(Arc::new(MemoryFileSystem::new()))
    }

    /// Creates a context over the given filesystem and a fixed clock.
    #[must_use]
    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { clock: Arc::new(FixedClock::epoch_2024()), fs }
    }
}
