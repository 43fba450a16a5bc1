// crates/cli/src/commands.rs
use anyhow::{Context, Result, bail};
use log::info;
use verstamp::placeholders::find_unresolved;
use verstamp::{EnvVersionSource, FileArtifactSink, GenerateStamp, GitRevisionProbe, InfrastructureError};

use crate::args::{CheckArgs, Command, GenerateArgs, ShowArgs};
use crate::config::StampConfig;
use crate::presentation;

pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate(args),
        Command::Show(args) => show(args),
        Command::Check(args) => check(args),
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let config = StampConfig::from_generate(args)?;
    let probe = GitRevisionProbe::new();
    let source = EnvVersionSource::cargo();
    let mut usecase = GenerateStamp::new(&probe);
    if config.from_env {
        usecase = usecase.with_source(&source);
    }

    let rendered = usecase.render(&config.request, &config.render)?;
    match &config.output {
        Some(path) => {
            rendered
                .write_to(&FileArtifactSink, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => presentation::print_generated(&rendered.contents).context("failed to write to stdout")?,
    }
    Ok(())
}

fn show(args: &ShowArgs) -> Result<()> {
    let config = StampConfig::from_input(&args.input)?;
    let probe = GitRevisionProbe::new();
    let source = EnvVersionSource::cargo();
    let mut usecase = GenerateStamp::new(&probe);
    if config.from_env {
        usecase = usecase.with_source(&source);
    }

    let stamp = usecase.resolve(&config.request)?;
    presentation::print_stamp(&stamp, args.json)?;
    Ok(())
}

fn check(args: &CheckArgs) -> Result<()> {
    let mut total = 0usize;
    for path in &args.files {
        let text = std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })?;
        let found = find_unresolved(&text);
        if found.is_empty() {
            info!("{}: ok", path.display());
        }
        presentation::print_placeholders(path, &found);
        total += found.len();
    }
    if total > 0 {
        bail!("{total} unresolved placeholder(s) found");
    }
    Ok(())
}
