// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    PresentationResult, Result, VerstampError,
};

pub mod error;
