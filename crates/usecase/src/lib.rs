//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and ports to implement stamping:
//!
//! - [`request`]: What the caller asks for (explicit values, revision input)
//! - [`generate`]: Resolve, validate, render and persist a version stamp
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod generate;
pub mod request;

pub use generate::{GenerateStamp, RenderedStamp};
pub use request::{RevisionInput, StampRequest};
