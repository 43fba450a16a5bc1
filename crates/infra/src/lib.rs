// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cargo;
pub mod env;
pub mod git;
pub mod logging;
pub mod persistence;

pub use env::EnvVersionSource;
pub use git::GitRevisionProbe;
pub use persistence::FileArtifactSink;
