//! Version of this binary, stamped by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// `MAJOR.MINOR.PATCH (revision)`, or without the parenthesised part when
/// the build had no revision.
pub const DISPLAY: &str = env!("VERSTAMP_VERSION");
