//! # Domain
//!
//! Version metadata as a build artifact sees it: three numeric components,
//! a revision identifier, and the renderers that turn them into a generated
//! constants file.
//!
//! - [`value_objects`]: validated components, revision and constant prefix
//! - [`model`]: the immutable [`VersionStamp`] and its builder
//! - [`policy`]: what to do when no revision can be determined
//! - [`render`]: Rust, C header and JSON emitters
//! - [`placeholders`]: detection of unresolved `@NAME@` tokens

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod placeholders;
pub mod policy;
pub mod render;
pub mod value_objects;

pub use model::{VersionStamp, VersionStampBuilder};
pub use policy::RevisionPolicy;
pub use render::{OutputFormat, RenderOptions, Visibility, render};
pub use value_objects::{ComponentField, ConstPrefix, Revision, VersionComponent};
