// crates/domain/src/value_objects/prefix.rs
use verstamp_shared_kernel::{DomainError, DomainResult};

/// Prefix prepended to every generated constant name, e.g. `CALC_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstPrefix {
    original: String,
}

impl ConstPrefix {
    pub fn new(prefix: &str) -> DomainResult<Self> {
        let invalid = |details: &str| DomainError::InvalidPrefix {
            prefix: prefix.to_string(),
            details: details.to_string(),
        };

        let mut chars = prefix.chars();
        match chars.next() {
            None => return Err(invalid("must not be empty")),
            Some(first) if !first.is_ascii_uppercase() => {
                return Err(invalid("must start with an uppercase ASCII letter"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
            return Err(invalid("may only contain A-Z, 0-9 and '_'"));
        }

        Ok(Self { original: prefix.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn apply(&self, name: &str) -> String {
        format!("{}{name}", self.original)
    }
}
