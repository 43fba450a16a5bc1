// crates/cli/src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use verstamp::env::{self, RevisionOverride};
use verstamp::{
    ConstPrefix, OutputFormat, PresentationError, ProbeRequest, RenderOptions, Result, RevisionInput,
    RevisionPolicy, StampRequest, Visibility,
};

use crate::args::{GenerateArgs, InputArgs};

/// Everything a command needs, resolved from arguments and environment.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StampConfig {
    pub request: StampRequest,
    #[builder(default)]
    pub from_env: bool,
    #[builder(default)]
    pub render: RenderOptions,
    #[builder(default)]
    pub output: Option<PathBuf>,
}

impl StampConfig {
    pub fn from_input(input: &InputArgs) -> Result<Self> {
        StampConfigBuilder::default()
            .request(stamp_request(input)?)
            .from_env(input.from_env)
            .build()
            .map_err(|e| config_error(&e))
    }

    pub fn from_generate(args: &GenerateArgs) -> Result<Self> {
        let prefix = args.prefix.as_deref().map(ConstPrefix::new).transpose()?;
        let render = RenderOptions {
            format: args.format.into(),
            prefix,
            visibility: args.visibility.into(),
        };
        reject_unused_render_flags(&render)?;

        StampConfigBuilder::default()
            .request(stamp_request(&args.input)?)
            .from_env(args.input.from_env)
            .render(render)
            .output(args.output.clone())
            .build()
            .map_err(|e| config_error(&e))
    }
}

fn stamp_request(input: &InputArgs) -> Result<StampRequest> {
    let mut request = StampRequest::new(revision_input(input)?);
    request.major = input.major.clone();
    request.minor = input.minor.clone();
    request.patch = input.patch.clone();
    request.version = input.semver.clone();
    request.policy = if input.allow_missing_revision {
        RevisionPolicy::AllowMissing
    } else {
        RevisionPolicy::Require
    };
    Ok(request)
}

/// `--revision` > `--no-revision` > `VERSTAMP_REVISION` > git.
fn revision_input(input: &InputArgs) -> Result<RevisionInput> {
    if let Some(token) = &input.revision {
        return Ok(RevisionInput::Explicit(token.clone()));
    }
    if input.no_revision {
        return Ok(RevisionInput::Unavailable);
    }
    Ok(match env::revision_override()? {
        Some(RevisionOverride::Token(token)) => RevisionInput::Explicit(token),
        Some(RevisionOverride::Unavailable) => RevisionInput::Unavailable,
        None => RevisionInput::Probe(ProbeRequest {
            repo_dir: input.repo.clone(),
            abbrev: usize::from(input.abbrev),
            mark_dirty: input.dirty,
        }),
    })
}

/// JSON carries no constant names or visibility, so these flags would be
/// dropped without effect.
fn reject_unused_render_flags(render: &RenderOptions) -> Result<()> {
    if render.format != OutputFormat::Json {
        return Ok(());
    }
    let argument = if render.prefix.is_some() {
        "--prefix"
    } else if render.visibility != Visibility::default() {
        "--visibility"
    } else {
        return Ok(());
    };
    Err(PresentationError::ArgumentParsing {
        argument: argument.to_string(),
        reason: "only applies to --format rust and c-header".to_string(),
    }
    .into())
}

fn config_error(err: &StampConfigBuilderError) -> verstamp::VerstampError {
    PresentationError::ArgumentParsing {
        argument: "config".to_string(),
        reason: err.to_string(),
    }
    .into()
}
