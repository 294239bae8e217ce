//! Persistence of raw response artifacts.
//!
//! Artifacts are written once and never updated in place; a second fetch of the
//! same query overwrites the previous file.

use std::fs;
use std::io;
use std::path::Path;

/// Capability to write and read whole artifacts.
pub trait ArtifactStore: Send + Sync {
    /// Writes `bytes` verbatim, replacing any existing artifact at `path`.
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Stores artifacts on the local file system.
#[derive(Debug, Default, Clone)]
pub struct FileSystemStore;

impl ArtifactStore for FileSystemStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
