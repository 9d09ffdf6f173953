// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use route_count_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Immediate entries of one directory, partitioned by kind.
///
/// Entries that are neither regular files nor directories are dropped by the
/// adapter. Paths are the listed directory joined with the entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

/// Port for listing a single directory level.
pub trait DirectoryLister {
    /// Fails with `DomainError::NotADirectory` when `path` is not a directory.
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    fn list(&self, dir: &Path, follow_links: bool) -> Result<DirectoryListing>;
}
