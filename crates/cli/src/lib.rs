// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod commands;
pub mod config;
pub mod options;
pub mod presentation;
pub mod version;
