// crates/infra/src/env.rs
use std::env::VarError;

use verstamp_ports::version_source::{RawComponents, VersionSource};
use verstamp_shared_kernel::{InfraResult, InfrastructureError, Result};

/// Variable consulted for an explicit revision identifier.
pub const REVISION_VAR: &str = "VERSTAMP_REVISION";

/// Variable holding the log level of the CLI.
pub const LOG_VAR: &str = "VERSTAMP_LOG";

pub const CARGO_MAJOR_VAR: &str = "CARGO_PKG_VERSION_MAJOR";
pub const CARGO_MINOR_VAR: &str = "CARGO_PKG_VERSION_MINOR";
pub const CARGO_PATCH_VAR: &str = "CARGO_PKG_VERSION_PATCH";

type Lookup = fn(&str) -> std::result::Result<String, VarError>;

/// Reads the version components from environment variables, by default the
/// ones Cargo sets for build scripts.
#[derive(Debug, Clone)]
pub struct EnvVersionSource {
    names: [String; 3],
    lookup: Lookup,
}

impl EnvVersionSource {
    pub fn new(major: &str, minor: &str, patch: &str) -> Self {
        Self {
            names: [major.to_string(), minor.to_string(), patch.to_string()],
            lookup: |name| std::env::var(name),
        }
    }

    pub fn cargo() -> Self {
        Self::new(CARGO_MAJOR_VAR, CARGO_MINOR_VAR, CARGO_PATCH_VAR)
    }

    /// Replaces the process environment with `lookup`.
    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn read(&self, name: &str) -> InfraResult<Option<String>> {
        read_var(self.lookup, name)
    }
}

impl VersionSource for EnvVersionSource {
    fn read_components(&self) -> Result<RawComponents> {
        let [major, minor, patch] = &self.names;
        Ok(RawComponents {
            major: self.read(major)?,
            minor: self.read(minor)?,
            patch: self.read(patch)?,
        })
    }

    fn describe(&self) -> String {
        format!("environment ({})", self.names.join(", "))
    }
}

/// Outcome of looking at the revision override variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionOverride {
    Token(String),
    /// Set to the empty string: the caller declares there is no revision.
    Unavailable,
}

/// Reads [`REVISION_VAR`]; `None` when it is not set at all.
pub fn revision_override() -> InfraResult<Option<RevisionOverride>> {
    revision_override_with(|name| std::env::var(name))
}

pub fn revision_override_with(lookup: Lookup) -> InfraResult<Option<RevisionOverride>> {
    Ok(read_var(lookup, REVISION_VAR)?.map(|value| {
        let value = value.trim();
        if value.is_empty() {
            RevisionOverride::Unavailable
        } else {
            RevisionOverride::Token(value.to_string())
        }
    }))
}

fn read_var(lookup: Lookup, name: &str) -> InfraResult<Option<String>> {
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err @ VarError::NotUnicode(_)) => Err(InfrastructureError::EnvVar {
            name: name.to_string(),
            details: err.to_string(),
        }),
    }
}
