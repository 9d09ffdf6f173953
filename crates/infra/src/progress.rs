// crates/infra/src/progress.rs
use std::{
    io::{self, Write},
    path::Path,
};

use route_count_ports::progress::ProgressSink;
use route_count_shared_kernel::{Result, RouteCount};

/// Writes one line per counted file to stderr, keeping stdout for the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn on_file(&self, path: &Path, routes: RouteCount) -> Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "[scan] {} --> {routes}", path.display())?;
        Ok(())
    }

    fn on_complete(&self, total: RouteCount) -> Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "[scan] done, {total} routes")?;
        Ok(())
    }
}
