// crates/domain/src/value_objects/component.rs
use std::fmt;

use serde::Serialize;
use verstamp_shared_kernel::{DomainError, DomainResult};

/// Which of the three numeric components a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentField {
    Major,
    Minor,
    Patch,
}

impl ComponentField {
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }

    /// Name of the generated constant, before any prefix is applied.
    pub const fn const_name(self) -> &'static str {
        match self {
            Self::Major => "VERSION_MAJOR",
            Self::Minor => "VERSION_MINOR",
            Self::Patch => "VERSION_PATCH",
        }
    }
}

impl fmt::Display for ComponentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-negative version number component.
///
/// Parsing is strict so that the emitted literal is always textually identical
/// to the supplied input: `"007"` is rejected instead of becoming `7`, and a
/// value that does not fit in `u32` is rejected instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionComponent(u32);

impl VersionComponent {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn parse(field: ComponentField, text: &str) -> DomainResult<Self> {
        if text.is_empty() {
            return Err(DomainError::MissingComponent { field: field.to_string() });
        }

        let invalid = |details: &str| DomainError::InvalidComponent {
            field: field.to_string(),
            value: text.to_string(),
            details: details.to_string(),
        };

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must contain only decimal digits"));
        }
        if text.len() > 1 && text.starts_with('0') {
            return Err(invalid("leading zeros are not allowed"));
        }

        text.parse::<u32>()
            .map(Self)
            .map_err(|_| invalid("value exceeds u32::MAX"))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for VersionComponent {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
