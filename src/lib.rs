//! # verstamp
//!
//! Stamps a crate with its version number and source-control revision at
//! build time. From a build script:
//!
//! ```no_run
//! // build.rs
//! fn main() -> verstamp::Result<()> {
//!     verstamp::BuildStamp::from_cargo_env()
//!         .allow_missing_revision()
//!         .write_to_out_dir("version.rs")?;
//!     Ok(())
//! }
//! ```
//!
//! and in the crate:
//!
//! ```ignore
//! include!(concat!(env!("OUT_DIR"), "/version.rs"));
//! // VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH: u32; GIT_HASH: &str
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod build_script;

pub use build_script::{BuildStamp, DISPLAY_ENV};
pub use verstamp_domain::{
    ConstPrefix, OutputFormat, RenderOptions, Revision, RevisionPolicy, VersionStamp, Visibility, placeholders, render,
};
pub use verstamp_infra::{cargo, env, logging};
pub use verstamp_infra::{EnvVersionSource, FileArtifactSink, GitRevisionProbe};
pub use verstamp_ports::revision::ProbeRequest;
pub use verstamp_shared_kernel::{DomainError, ErrorContext, InfrastructureError, PresentationError, Result, VerstampError};
pub use verstamp_usecase::{GenerateStamp, RenderedStamp, RevisionInput, StampRequest};
