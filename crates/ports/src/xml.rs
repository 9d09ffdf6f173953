// crates/ports/src/xml.rs
use std::path::Path;

use route_count_shared_kernel::{Result, RouteCount};

/// Port for counting `route` elements in one document.
pub trait RouteCounter {
    /// Reads and parses `file`. Malformed content is an error, never a zero count.
    fn count_routes(&self, file: &Path) -> Result<RouteCount>;
}
