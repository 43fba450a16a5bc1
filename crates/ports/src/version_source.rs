// crates/ports/src/version_source.rs
use verstamp_shared_kernel::Result;

/// Version components exactly as the build system supplied them.
/// `None` means the build system has no value for that component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawComponents {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
}

/// Port for reading the configured version number.
pub trait VersionSource: Send + Sync {
    fn read_components(&self) -> Result<RawComponents>;

    /// Short human description used in log and error messages.
    fn describe(&self) -> String;
}
