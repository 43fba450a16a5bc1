//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`version_source`]: Where the numeric version components come from
//! - [`revision`]: Looking up the source-control revision
//! - [`artifact`]: Persisting the generated file
//!
//! These ports allow the domain and use case layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod artifact;
pub mod revision;
pub mod version_source;
