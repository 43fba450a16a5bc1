// crates/usecase/src/request.rs
use verstamp_domain::RevisionPolicy;
use verstamp_ports::revision::ProbeRequest;

/// How the revision identifier is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionInput {
    /// A token supplied by the caller; it is validated but never looked up.
    Explicit(String),
    /// The caller states that no revision exists. Rendered as the empty
    /// sentinel regardless of [`RevisionPolicy`].
    Unavailable,
    /// Ask the revision probe.
    Probe(ProbeRequest),
}

/// Everything a caller may pin down explicitly. Values left as `None` are
/// taken from the configured version source, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampRequest {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
    /// `MAJOR.MINOR.PATCH`; individual components above still win over it.
    pub version: Option<String>,
    pub revision: RevisionInput,
    pub policy: RevisionPolicy,
}

impl StampRequest {
    pub fn new(revision: RevisionInput) -> Self {
        Self {
            major: None,
            minor: None,
            patch: None,
            version: None,
            revision,
            policy: RevisionPolicy::default(),
        }
    }
}
