// crates/ports/src/artifact.rs
use std::path::Path;

use verstamp_shared_kernel::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The destination already held identical bytes and was left alone.
    Unchanged,
}

/// Port for persisting a generated file.
pub trait ArtifactSink: Send + Sync {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<WriteOutcome>;
}
