// crates/domain/src/value_objects/revision.rs
use std::fmt;

use serde::{Serialize, Serializer};
use verstamp_shared_kernel::{DomainError, DomainResult};

use crate::policy::RevisionPolicy;

/// Source-control revision identifier of the snapshot being built.
///
/// An unavailable revision is a value of its own and always renders as the
/// empty string, never as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Revision {
    token: Option<String>,
}

impl Revision {
    pub const MAX_LEN: usize = 64;

    /// Validates a revision token such as `a1b2c3d` or `a1b2c3d-dirty`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let invalid = |details: &str| DomainError::InvalidRevision {
            value: text.to_string(),
            details: details.to_string(),
        };

        if text.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if text.len() > 1 && text.starts_with('@') && text.ends_with('@') {
            return Err(invalid("looks like an unresolved placeholder"));
        }
        if text.len() > Self::MAX_LEN {
            return Err(invalid("longer than 64 characters"));
        }
        if let Some(bad) = text.chars().find(|c| !is_token_char(*c)) {
            return Err(invalid(&format!("unexpected character {bad:?}")));
        }

        Ok(Self { token: Some(text.to_string()) })
    }

    pub const fn unavailable() -> Self {
        Self { token: None }
    }

    /// Turns the outcome of a revision lookup into a revision, honouring
    /// `policy` when nothing was found.
    pub fn resolve(found: Option<&str>, policy: RevisionPolicy) -> DomainResult<Self> {
        match found {
            Some(text) => Self::parse(text),
            None if policy.allows_missing() => Ok(Self::unavailable()),
            None => Err(DomainError::RevisionUnavailable {
                reason: "no revision was supplied and none could be determined from source control"
                    .to_string(),
            }),
        }
    }

    /// The token, or `""` when unavailable.
    pub fn as_str(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    pub fn is_available(&self) -> bool {
        self.token.is_some()
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Revision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
