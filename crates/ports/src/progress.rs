// crates/ports/src/progress.rs
use std::path::Path;

use route_count_shared_kernel::{Result, RouteCount};

pub trait ProgressSink {
    fn on_file(&self, path: &Path, routes: RouteCount) -> Result<()>;
    fn on_complete(&self, total: RouteCount) -> Result<()>;
}

/// Sink that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_file(&self, _path: &Path, _routes: RouteCount) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _total: RouteCount) -> Result<()> {
        Ok(())
    }
}
