/// What generation does when no revision identifier can be determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevisionPolicy {
    /// Fail the build.
    #[default]
    Require,
    /// Emit the empty-string sentinel.
    AllowMissing,
}

impl RevisionPolicy {
    #[inline]
    pub const fn allows_missing(self) -> bool {
        matches!(self, Self::AllowMissing)
    }
}
