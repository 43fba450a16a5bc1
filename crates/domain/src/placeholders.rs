//! Detection of configure-time placeholders (`@NAME@`) that survived into a
//! generated file.

use std::sync::OnceLock;

use regex::Regex;
use verstamp_shared_kernel::{DomainError, DomainResult};

/// An unresolved placeholder and the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub line: usize,
    pub token: String,
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@[A-Za-z_][A-Za-z0-9_]*@").unwrap())
}

pub fn find_unresolved(text: &str) -> Vec<Placeholder> {
    text.lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            placeholder_re().find_iter(line).map(move |m| Placeholder {
                line: idx + 1,
                token: m.as_str().to_string(),
            })
        })
        .collect()
}

/// Fails with every placeholder token found in `text`.
pub fn ensure_resolved(text: &str) -> DomainResult<()> {
    let found = find_unresolved(text);
    if found.is_empty() {
        return Ok(());
    }
    Err(DomainError::UnresolvedPlaceholders {
        tokens: found.into_iter().map(|p| p.token).collect(),
    })
}
