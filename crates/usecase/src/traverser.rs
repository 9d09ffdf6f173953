use std::path::{Path, PathBuf};

use route_count_domain::{ErrorPolicy, RouteTally, ScanOptions, ScanSummary, is_route_file};
use route_count_ports::{
    filesystem::DirectoryLister,
    progress::{ProgressSink, SilentProgress},
    xml::RouteCounter,
};
use route_count_shared_kernel::{ApplicationError, Result, RouteCount, RouteCountError};
use tracing::{debug, info, warn};

static SILENT: SilentProgress = SilentProgress;

/// Depth-first walk that sums `<route>` elements over every `routes.xml`
/// under a root directory, the root included.
///
/// The walk keeps its own work stack, so tree depth is not limited by the
/// call stack. Within one directory, route files are counted before any
/// sub-directory is entered; siblings are visited in name order.
pub struct CountRoutes<'a> {
    lister: &'a dyn DirectoryLister,
    counter: &'a dyn RouteCounter,
    progress: &'a dyn ProgressSink,
    options: ScanOptions,
}

impl<'a> CountRoutes<'a> {
    pub fn new(lister: &'a dyn DirectoryLister, counter: &'a dyn RouteCounter) -> Self {
        Self { lister, counter, progress: &SILENT, options: ScanOptions::default() }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Total only.
    pub fn total(&self, root: &Path) -> Result<RouteCount> {
        self.run(root).map(|summary| summary.total)
    }

    pub fn run(&self, root: &Path) -> Result<ScanSummary> {
        self.lister.ensure_directory(root)?;

        let mut summary = ScanSummary::new(root);
        let mut pending: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

        while let Some((dir, depth)) = pending.pop() {
            debug!(dir = %dir.display(), depth, "listing directory");
            let listing = match self.lister.list(&dir, self.options.follow_links) {
                Ok(listing) => listing,
                Err(err) if dir.as_path() != root => {
                    self.absorb(&mut summary, root, &dir, err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };
            summary.record_directory();

            let mut route_files: Vec<PathBuf> = listing
                .files
                .into_iter()
                .filter(|path| path.file_name().is_some_and(is_route_file))
                .collect();
            route_files.sort();

            for file in route_files {
                match self.counter.count_routes(&file) {
                    Ok(routes) => {
                        debug!(file = %file.display(), routes = routes.value(), "counted routes");
                        self.progress.on_file(&file, routes)?;
                        summary.record_file(RouteTally::new(file, routes));
                    }
                    Err(err) => self.absorb(&mut summary, root, &file, err)?,
                }
            }

            if self.options.descends_below(depth) {
                let mut children = listing.directories;
                // Reverse name order on the stack pops children in name order.
                children.sort_by(|a, b| b.cmp(a));
                pending.extend(children.into_iter().map(|child| (child, depth + 1)));
            } else if !listing.directories.is_empty() {
                debug!(dir = %dir.display(), depth, "max depth reached, not descending");
            }
        }

        self.progress.on_complete(summary.total)?;
        info!(
            root = %root.display(),
            total = summary.total.value(),
            files = summary.files.len(),
            directories = summary.directories,
            skipped = summary.skipped.len(),
            "scan finished"
        );
        Ok(summary)
    }

    /// Applies the error policy to a failure below the root.
    fn absorb(&self, summary: &mut ScanSummary, root: &Path, path: &Path, err: RouteCountError) -> Result<()> {
        match self.options.policy {
            ErrorPolicy::Strict => Err(ApplicationError::TraversalFailed {
                root: root.to_path_buf(),
                source: Box::new(err),
            }
            .into()),
            ErrorPolicy::SkipAndWarn => {
                warn!(path = %path.display(), error = %err, "skipping");
                summary.record_skipped(path, err.to_string());
                Ok(())
            }
        }
    }
}
