use std::path::{Path, PathBuf};

use route_count_shared_kernel::RouteCount;
use serde::{Deserialize, Serialize};

use crate::model::RouteTally;

/// A path left out of the total under [`ErrorPolicy::SkipAndWarn`](crate::ErrorPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one traversal.
///
/// `total` always equals the sum of `files`; the accumulator lives here and
/// nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub total: RouteCount,
    pub files: Vec<RouteTally>,
    pub directories: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanSummary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            total: RouteCount::zero(),
            files: Vec::new(),
            directories: 0,
            skipped: Vec::new(),
        }
    }

    pub fn record_file(&mut self, tally: RouteTally) {
        self.total += tally.routes;
        self.files.push(tally);
    }

    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_skipped(&mut self, path: &Path, reason: impl Into<String>) {
        self.skipped.push(SkippedEntry { path: path.to_path_buf(), reason: reason.into() });
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Recomputes the total from the per-file tallies.
    pub fn tallied_total(&self) -> RouteCount {
        self.files.iter().map(|t| t.routes).sum()
    }
}
