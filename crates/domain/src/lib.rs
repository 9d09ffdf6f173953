#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod route_file;

pub use model::{RouteTally, ScanSummary, SkippedEntry};
pub use options::{ErrorPolicy, ScanOptions};
pub use route_file::{ROUTE_ELEMENT, ROUTE_FILE_NAME, is_route_file};
