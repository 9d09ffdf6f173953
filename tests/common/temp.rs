use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Scratch directory tree populated with `routes.xml` fixtures.
#[derive(Debug)]
pub struct RouteTree {
    dir: TempDir,
}

impl RouteTree {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `<routes>` holding `count` empty `<route/>` children.
    pub fn routes(&self, rel_dir: &str, count: usize) -> PathBuf {
        let body = "<route/>".repeat(count);
        let rel = if rel_dir.is_empty() { "routes.xml".to_string() } else { format!("{rel_dir}/routes.xml") };
        self.write_file(&rel, &format!("<routes>{body}</routes>"))
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }
}
