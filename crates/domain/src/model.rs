pub mod route_tally;
pub mod scan_summary;

pub use route_tally::RouteTally;
pub use scan_summary::{ScanSummary, SkippedEntry};
