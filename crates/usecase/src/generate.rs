// crates/usecase/src/generate.rs
use std::path::Path;

use log::{debug, info, warn};
use verstamp_domain::placeholders::ensure_resolved;
use verstamp_domain::{ComponentField, RenderOptions, Revision, VersionComponent, VersionStamp, render};
use verstamp_ports::artifact::{ArtifactSink, WriteOutcome};
use verstamp_ports::revision::RevisionProbe;
use verstamp_ports::version_source::{RawComponents, VersionSource};
use verstamp_shared_kernel::{ErrorContext, Result};

use crate::request::{RevisionInput, StampRequest};

pub struct GenerateStamp<'a> {
    probe: &'a dyn RevisionProbe,
    source: Option<&'a dyn VersionSource>,
}

/// A resolved stamp together with its rendered text.
#[derive(Debug, Clone)]
pub struct RenderedStamp {
    pub stamp: VersionStamp,
    pub contents: String,
}

impl<'a> GenerateStamp<'a> {
    pub fn new(probe: &'a dyn RevisionProbe) -> Self {
        Self { probe, source: None }
    }

    pub fn with_source(mut self, source: &'a dyn VersionSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Resolves all four values. Precedence for each numeric component is:
    /// explicit component, explicit version string, version source.
    pub fn resolve(&self, request: &StampRequest) -> Result<VersionStamp> {
        let mut builder = VersionStamp::builder();

        if let Some(source) = self.source {
            let raw = source
                .read_components()
                .with_context(|| format!("reading version from {}", source.describe()))?;
            for field in ComponentField::ALL {
                if let Some(text) = raw_component(&raw, field) {
                    builder = builder.component(field, VersionComponent::parse(field, text)?);
                }
            }
        }

        if let Some(version) = &request.version {
            builder = builder.semver(version)?;
        }

        for field in ComponentField::ALL {
            if let Some(text) = explicit_component(request, field) {
                let value = VersionComponent::parse(field, text)?;
                if builder.has(field) {
                    debug!("explicit {field} = {value} overrides configured value");
                }
                builder = builder.component(field, value);
            }
        }

        let revision = self.resolve_revision(request)?;
        Ok(builder.revision(revision).build()?)
    }

    fn resolve_revision(&self, request: &StampRequest) -> Result<Revision> {
        match &request.revision {
            RevisionInput::Explicit(token) => Ok(Revision::parse(token)?),
            RevisionInput::Unavailable => Ok(Revision::unavailable()),
            RevisionInput::Probe(probe_request) => {
                let found = self.probe.probe(probe_request)?;
                match &found {
                    Some(token) => debug!("probed revision {token}"),
                    None if request.policy.allows_missing() => warn!(
                        "no revision found in {}; emitting an empty revision",
                        probe_request.repo_dir.display()
                    ),
                    None => {}
                }
                Ok(Revision::resolve(found.as_deref(), request.policy)?)
            }
        }
    }

    pub fn render(&self, request: &StampRequest, options: &RenderOptions) -> Result<RenderedStamp> {
        let stamp = self.resolve(request)?;
        let contents = render(&stamp, options)?;
        ensure_resolved(&contents)?;
        Ok(RenderedStamp { stamp, contents })
    }
}

impl RenderedStamp {
    pub fn write_to(&self, sink: &dyn ArtifactSink, path: &Path) -> Result<WriteOutcome> {
        let outcome = sink.write(path, self.contents.as_bytes())?;
        match outcome {
            WriteOutcome::Written => info!("wrote {} for {}", path.display(), self.stamp),
            WriteOutcome::Unchanged => debug!("{} is up to date", path.display()),
        }
        Ok(outcome)
    }
}

fn raw_component(raw: &RawComponents, field: ComponentField) -> Option<&str> {
    match field {
        ComponentField::Major => raw.major.as_deref(),
        ComponentField::Minor => raw.minor.as_deref(),
        ComponentField::Patch => raw.patch.as_deref(),
    }
}

fn explicit_component(request: &StampRequest, field: ComponentField) -> Option<&str> {
    match field {
        ComponentField::Major => request.major.as_deref(),
        ComponentField::Minor => request.minor.as_deref(),
        ComponentField::Patch => request.patch.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use verstamp_domain::{OutputFormat, RevisionPolicy};
    use verstamp_ports::revision::ProbeRequest;
    use verstamp_shared_kernel::{DomainError, VerstampError};

    use super::*;

    struct StubProbe(Option<&'static str>);

    impl RevisionProbe for StubProbe {
        fn probe(&self, _request: &ProbeRequest) -> Result<Option<String>> {
            Ok(self.0.map(str::to_string))
        }
    }

    struct StubSource(RawComponents);

    impl VersionSource for StubSource {
        fn read_components(&self) -> Result<RawComponents> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    #[derive(Default)]
    struct MemorySink {
        writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl ArtifactSink for MemorySink {
        fn write(&self, path: &Path, contents: &[u8]) -> Result<WriteOutcome> {
            self.writes.lock().unwrap().push((path.to_owned(), contents.to_vec()));
            Ok(WriteOutcome::Written)
        }
    }

    fn raw(major: &str, minor: &str, patch: &str) -> RawComponents {
        RawComponents {
            major: Some(major.into()),
            minor: Some(minor.into()),
            patch: Some(patch.into()),
        }
    }

    fn probe_request() -> StampRequest {
        StampRequest::new(RevisionInput::Probe(ProbeRequest::new(".")))
    }

    #[test]
    fn resolves_from_source_and_probe() {
        let probe = StubProbe(Some("a1b2c3d"));
        let source = StubSource(raw("2", "5", "1"));
        let stamp = GenerateStamp::new(&probe).with_source(&source).resolve(&probe_request()).unwrap();
        assert_eq!(stamp.to_string(), "2.5.1 (a1b2c3d)");
    }

    #[test]
    fn explicit_components_win() {
        let probe = StubProbe(Some("a1b2c3d"));
        let source = StubSource(raw("2", "5", "1"));
        let mut request = probe_request();
        request.version = Some("3.0.0".into());
        request.patch = Some("9".into());
        let stamp = GenerateStamp::new(&probe).with_source(&source).resolve(&request).unwrap();
        assert_eq!(stamp.semver(), "3.0.9");
    }

    #[test]
    fn missing_component_fails_instead_of_defaulting() {
        let probe = StubProbe(Some("a1b2c3d"));
        let source = StubSource(RawComponents { patch: None, ..raw("2", "5", "") });
        let err = GenerateStamp::new(&probe).with_source(&source).resolve(&probe_request()).unwrap_err();
        assert!(matches!(
            err,
            VerstampError::Domain(DomainError::MissingComponent { ref field }) if field == "patch"
        ));
    }

    #[test]
    fn require_policy_fails_without_revision() {
        let probe = StubProbe(None);
        let source = StubSource(raw("1", "0", "0"));
        let err = GenerateStamp::new(&probe).with_source(&source).resolve(&probe_request()).unwrap_err();
        assert!(matches!(err, VerstampError::Domain(DomainError::RevisionUnavailable { .. })));
    }

    #[test]
    fn allow_missing_policy_emits_empty_revision() {
        let probe = StubProbe(None);
        let source = StubSource(raw("1", "0", "0"));
        let mut request = probe_request();
        request.policy = RevisionPolicy::AllowMissing;
        let rendered = GenerateStamp::new(&probe)
            .with_source(&source)
            .render(&request, &RenderOptions::new(OutputFormat::Rust))
            .unwrap();
        assert!(rendered.contents.contains("pub const GIT_HASH: &str = \"\";"));
    }

    #[test]
    fn explicit_revision_skips_probe_and_is_validated() {
        let probe = StubProbe(Some("ignored"));
        let mut request = StampRequest::new(RevisionInput::Explicit("deadbee".into()));
        request.version = Some("0.1.0".into());
        let stamp = GenerateStamp::new(&probe).resolve(&request).unwrap();
        assert_eq!(stamp.revision().as_str(), "deadbee");

        request.revision = RevisionInput::Explicit("@GIT_HASH@".into());
        assert!(GenerateStamp::new(&probe).resolve(&request).is_err());
    }

    #[test]
    fn rendered_stamp_is_written_to_sink() {
        let probe = StubProbe(Some("a1b2c3d"));
        let mut request = probe_request();
        request.version = Some("2.5.1".into());
        let rendered = GenerateStamp::new(&probe)
            .render(&request, &RenderOptions::new(OutputFormat::CHeader))
            .unwrap();

        let sink = MemorySink::default();
        let outcome = rendered.write_to(&sink, Path::new("out/version.h")).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes[0].0, PathBuf::from("out/version.h"));
        assert_eq!(writes[0].1, rendered.contents.as_bytes());
    }
}
