// src/run.rs
use crate::config::Config;
use route_count_domain::ScanSummary;
use route_count_infra::{LocalDirectoryLister, StderrProgress, XmlRouteCounter};
use route_count_shared_kernel::Result;
use route_count_usecase::CountRoutes;

/// Wires the std-fs and XML adapters into the traverser and runs one scan.
pub fn scan(config: &Config) -> Result<ScanSummary> {
    let lister = LocalDirectoryLister::new();
    let counter = XmlRouteCounter::new();
    let progress = StderrProgress;

    let mut usecase = CountRoutes::new(&lister, &counter).with_options(config.scan);
    if config.progress {
        usecase = usecase.with_progress(&progress);
    }
    usecase.run(&config.root)
}
