// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use route_count_domain::{ErrorPolicy, ScanOptions};
use std::path::PathBuf;

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub scan: ScanOptions,
    pub format: OutputFormat,
    pub per_file: bool,
    pub progress: bool,
    pub verbosity: u8,
}

impl Config {
    /// Defaults for scanning `root`: strict, text output, no extras.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scan: ScanOptions::default(),
            format: OutputFormat::Text,
            per_file: false,
            progress: false,
            verbosity: 0,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let policy = if args.behavior.keep_going { ErrorPolicy::SkipAndWarn } else { ErrorPolicy::Strict };
        let scan = ScanOptions::default()
            .with_policy(policy)
            .with_follow_links(!args.scan.no_follow)
            .with_max_depth(args.scan.max_depth);

        Self {
            root: args.directory,
            scan,
            format: args.output.format,
            per_file: args.output.per_file,
            progress: args.output.progress,
            verbosity: args.behavior.verbose,
        }
    }
}
