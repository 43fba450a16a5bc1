// src/build_script.rs
use std::path::{Path, PathBuf};

use log::LevelFilter;
use verstamp_domain::{ConstPrefix, OutputFormat, RenderOptions, RevisionPolicy, VersionStamp, Visibility};
use verstamp_infra::cargo::Directives;
use verstamp_infra::env::{self, RevisionOverride};
use verstamp_infra::{EnvVersionSource, FileArtifactSink, GitRevisionProbe, logging};
use verstamp_ports::revision::ProbeRequest;
use verstamp_shared_kernel::{ErrorContext, InfrastructureError, Result};
use verstamp_usecase::{GenerateStamp, RenderedStamp, RevisionInput, StampRequest};

/// Name of the `rustc-env` variable holding the stamp's display form,
/// e.g. `2.5.1 (a1b2c3d)`, for use with `env!`.
pub const DISPLAY_ENV: &str = "VERSTAMP_VERSION";

/// Build-script entry point: version from Cargo's environment, revision from
/// `VERSTAMP_REVISION` or git.
#[derive(Debug, Clone)]
pub struct BuildStamp {
    source: EnvVersionSource,
    probe: GitRevisionProbe,
    probe_request: ProbeRequest,
    explicit_revision: Option<String>,
    policy: RevisionPolicy,
    options: RenderOptions,
}

impl BuildStamp {
    /// Uses `CARGO_PKG_VERSION_{MAJOR,MINOR,PATCH}` and probes the
    /// repository containing `CARGO_MANIFEST_DIR`.
    pub fn from_cargo_env() -> Self {
        let repo_dir = std::env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
        Self::with_source(EnvVersionSource::cargo(), repo_dir)
    }

    pub fn with_source(source: EnvVersionSource, repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            probe: GitRevisionProbe::new(),
            probe_request: ProbeRequest::new(repo_dir),
            explicit_revision: None,
            policy: RevisionPolicy::Require,
            options: RenderOptions::default(),
        }
    }

    /// Emit an empty revision instead of failing when none can be found.
    pub fn allow_missing_revision(mut self) -> Self {
        self.policy = RevisionPolicy::AllowMissing;
        self
    }

    /// Pins the revision; neither the environment nor git is consulted.
    pub fn revision(mut self, token: impl Into<String>) -> Self {
        self.explicit_revision = Some(token.into());
        self
    }

    pub fn repo_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.probe_request.repo_dir = dir.into();
        self
    }

    pub fn abbrev(mut self, abbrev: usize) -> Self {
        self.probe_request.abbrev = abbrev;
        self
    }

    /// Appends `-dirty` to the revision when tracked files are modified.
    pub fn mark_dirty(mut self) -> Self {
        self.probe_request.mark_dirty = true;
        self
    }

    pub fn git_program(mut self, probe: GitRevisionProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.options.visibility = visibility;
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Result<Self> {
        self.options.prefix = Some(ConstPrefix::new(prefix)?);
        Ok(self)
    }

    fn revision_input(&self) -> Result<RevisionInput> {
        if let Some(token) = &self.explicit_revision {
            return Ok(RevisionInput::Explicit(token.clone()));
        }
        Ok(match env::revision_override()? {
            Some(RevisionOverride::Token(token)) => RevisionInput::Explicit(token),
            Some(RevisionOverride::Unavailable) => RevisionInput::Unavailable,
            None => RevisionInput::Probe(self.probe_request.clone()),
        })
    }

    /// Resolves and renders without touching the filesystem.
    pub fn generate(&self) -> Result<RenderedStamp> {
        let mut request = StampRequest::new(self.revision_input()?);
        request.policy = self.policy;
        GenerateStamp::new(&self.probe)
            .with_source(&self.source)
            .render(&request, &self.options)
    }

    /// Renders and writes to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<VersionStamp> {
        let path = path.as_ref();
        let rendered = self.generate()?;
        rendered
            .write_to(&FileArtifactSink, path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(rendered.stamp)
    }

    /// Writes `file_name` into `OUT_DIR` and prints the Cargo instructions
    /// that rerun the build script when the version or revision changes.
    pub fn write_to_out_dir(&self, file_name: &str) -> Result<VersionStamp> {
        logging::init_cargo(LevelFilter::Info);

        let out_dir = std::env::var_os("OUT_DIR").ok_or_else(|| InfrastructureError::EnvVar {
            name: "OUT_DIR".to_string(),
            details: "not set; write_to_out_dir must be called from a build script".to_string(),
        })?;
        let stamp = self.write_to(Path::new(&out_dir).join(file_name))?;

        self.directives(&stamp)?.emit()?;
        Ok(stamp)
    }

    fn directives(&self, stamp: &VersionStamp) -> Result<Directives> {
        let mut directives = Directives::new();
        directives.rerun_if_env_changed(env::REVISION_VAR);
        for name in self.source.variable_names() {
            directives.rerun_if_env_changed(name);
        }
        if self.explicit_revision.is_none() {
            for path in self.probe.watch_paths(&self.probe_request)? {
                directives.rerun_if_changed(&path);
            }
        }
        directives.rustc_env(DISPLAY_ENV, &stamp.to_string());
        Ok(directives)
    }
}
