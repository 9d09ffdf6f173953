use serde::{Deserialize, Serialize};

/// What the traversal does when a directory or `routes.xml` cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// First failure aborts the run with no partial total.
    #[default]
    Strict,
    /// Log the failure, record it as skipped and keep walking.
    /// The traversal root itself must still be listable.
    SkipAndWarn,
}

/// Knobs for a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    pub policy: ErrorPolicy,
    /// Classify symlinks by their target. When off, a symlink is neither a
    /// file nor a directory.
    pub follow_links: bool,
    /// Deepest directory level visited; the root is level 0.
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { policy: ErrorPolicy::Strict, follow_links: true, max_depth: None }
    }
}

impl ScanOptions {
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Whether children of a directory at `depth` should be visited.
    pub fn descends_below(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}
