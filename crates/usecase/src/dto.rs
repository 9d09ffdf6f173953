use std::path::PathBuf;

use route_count_domain::{ScanSummary, SkippedEntry};
use route_count_shared_kernel::path::logical_absolute;
use serde::Serialize;

/// Serializable view of a finished scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub total: usize,
    pub files: Vec<ReportedFile>,
    pub directories: usize,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportedFile {
    pub path: PathBuf,
    pub routes: usize,
}

impl From<ScanSummary> for ScanReport {
    fn from(summary: ScanSummary) -> Self {
        Self {
            root: logical_absolute(&summary.root),
            total: summary.total.value(),
            files: summary
                .files
                .into_iter()
                .map(|tally| ReportedFile { path: tally.path, routes: tally.routes.value() })
                .collect(),
            directories: summary.directories,
            skipped: summary.skipped,
        }
    }
}
