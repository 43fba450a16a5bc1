// crates/domain/src/model/stamp.rs
use std::fmt;

use serde::Serialize;
use verstamp_shared_kernel::{DomainError, DomainResult};

use crate::value_objects::{ComponentField, Revision, VersionComponent};

/// The four values a build artifact is stamped with.
///
/// Only obtainable through [`VersionStampBuilder::build`], which refuses to
/// produce a stamp with a missing component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionStamp {
    major: VersionComponent,
    minor: VersionComponent,
    patch: VersionComponent,
    revision: Revision,
}

impl VersionStamp {
    pub fn builder() -> VersionStampBuilder {
        VersionStampBuilder::default()
    }

    #[inline]
    pub fn major(&self) -> u32 {
        self.major.get()
    }

    #[inline]
    pub fn minor(&self) -> u32 {
        self.minor.get()
    }

    #[inline]
    pub fn patch(&self) -> u32 {
        self.patch.get()
    }

    #[inline]
    pub fn component(&self, field: ComponentField) -> VersionComponent {
        match field {
            ComponentField::Major => self.major,
            ComponentField::Minor => self.minor,
            ComponentField::Patch => self.patch,
        }
    }

    #[inline]
    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// `MAJOR.MINOR.PATCH` without the revision.
    pub fn semver(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.revision.is_available() {
            write!(f, " ({})", self.revision)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct VersionStampBuilder {
    major: Option<VersionComponent>,
    minor: Option<VersionComponent>,
    patch: Option<VersionComponent>,
    revision: Option<Revision>,
}

impl VersionStampBuilder {
    pub fn major(self, major: u32) -> Self {
        self.component(ComponentField::Major, VersionComponent::new(major))
    }

    pub fn minor(self, minor: u32) -> Self {
        self.component(ComponentField::Minor, VersionComponent::new(minor))
    }

    pub fn patch(self, patch: u32) -> Self {
        self.component(ComponentField::Patch, VersionComponent::new(patch))
    }

    pub fn component(mut self, field: ComponentField, value: VersionComponent) -> Self {
        match field {
            ComponentField::Major => self.major = Some(value),
            ComponentField::Minor => self.minor = Some(value),
            ComponentField::Patch => self.patch = Some(value),
        }
        self
    }

    /// Sets all three components from a strict `MAJOR.MINOR.PATCH` string.
    /// Pre-release and build metadata suffixes are rejected.
    pub fn semver(self, text: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(DomainError::InvalidVersionString { value: text.to_string() });
        };

        Ok(self
            .component(ComponentField::Major, VersionComponent::parse(ComponentField::Major, major)?)
            .component(ComponentField::Minor, VersionComponent::parse(ComponentField::Minor, minor)?)
            .component(ComponentField::Patch, VersionComponent::parse(ComponentField::Patch, patch)?))
    }

    pub fn revision(mut self, revision: Revision) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn has(&self, field: ComponentField) -> bool {
        match field {
            ComponentField::Major => self.major.is_some(),
            ComponentField::Minor => self.minor.is_some(),
            ComponentField::Patch => self.patch.is_some(),
        }
    }

    pub fn build(self) -> DomainResult<VersionStamp> {
        let missing = |field: ComponentField| DomainError::MissingComponent { field: field.to_string() };

        Ok(VersionStamp {
            major: self.major.ok_or_else(|| missing(ComponentField::Major))?,
            minor: self.minor.ok_or_else(|| missing(ComponentField::Minor))?,
            patch: self.patch.ok_or_else(|| missing(ComponentField::Patch))?,
            revision: self.revision.ok_or_else(|| DomainError::RevisionUnavailable {
                reason: "revision was never resolved".to_string(),
            })?,
        })
    }
}
