// crates/ports/src/revision.rs
use std::path::PathBuf;

use verstamp_shared_kernel::Result;

/// Input parameters controlling a revision lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub repo_dir: PathBuf,
    pub abbrev: usize,
    pub mark_dirty: bool,
}

impl ProbeRequest {
    pub const DEFAULT_ABBREV: usize = 7;

    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self { repo_dir: repo_dir.into(), abbrev: Self::DEFAULT_ABBREV, mark_dirty: false }
    }
}

/// Port for determining the revision identifier of a source tree.
pub trait RevisionProbe: Send + Sync {
    /// Returns `Ok(None)` when the tree carries no usable source-control
    /// metadata; errors are reserved for failures of the tool itself.
    fn probe(&self, request: &ProbeRequest) -> Result<Option<String>>;
}
