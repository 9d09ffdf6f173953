// crates/infra/src/filesystem.rs
use std::{
    fs::{self, DirEntry},
    path::{Path, PathBuf},
};

use route_count_ports::filesystem::{DirectoryListing, DirectoryLister};
use route_count_shared_kernel::{DomainError, InfrastructureError, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
    Other,
}

// With follow_links (the default) a symlink's target decides and a dangling
// link is skipped. Without it the entry's own type decides, so a symlink is
// neither a file nor a directory.
fn classify(entry: &DirEntry, follow_links: bool) -> EntryKind {
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(err) => {
            debug!(path = %entry.path().display(), error = %err, "cannot stat entry");
            return EntryKind::Other;
        }
    };

    let file_type = if file_type.is_symlink() && follow_links {
        match fs::metadata(entry.path()) {
            Ok(meta) => meta.file_type(),
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "dangling symlink");
                return EntryKind::Other;
            }
        }
    } else {
        file_type
    };

    if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    }
}

/// `DirectoryLister` over `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDirectoryLister;

impl LocalDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalDirectoryLister {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        let meta = fs::metadata(path)
            .map_err(|source| InfrastructureError::DirectoryRead { path: path.to_path_buf(), source })?;
        if meta.is_dir() {
            Ok(())
        } else {
            Err(DomainError::NotADirectory { path: path.to_path_buf() }.into())
        }
    }

    fn list(&self, dir: &Path, follow_links: bool) -> Result<DirectoryListing> {
        let read_err = |source| InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source };

        let mut listing = DirectoryListing::default();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path: PathBuf = entry.path();
            match classify(&entry, follow_links) {
                EntryKind::File => listing.files.push(path),
                EntryKind::Directory => listing.directories.push(path),
                EntryKind::Other => {}
            }
        }
        Ok(listing)
    }
}
