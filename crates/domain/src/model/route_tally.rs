use std::path::PathBuf;

use route_count_shared_kernel::RouteCount;
use serde::{Deserialize, Serialize};

/// Routes found in one `routes.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTally {
    pub path: PathBuf,
    pub routes: RouteCount,
}

impl RouteTally {
    pub fn new(path: impl Into<PathBuf>, routes: impl Into<RouteCount>) -> Self {
        Self { path: path.into(), routes: routes.into() }
    }
}
