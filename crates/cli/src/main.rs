// crates/cli/src/main.rs
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use verstamp::env::LOG_VAR;
use verstamp::logging;
use verstamp_cli::args::Args;
use verstamp_cli::commands;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_stderr(log_level(&args));

    match commands::run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn log_level(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::Error;
    }
    let base = std::env::var(LOG_VAR)
        .ok()
        .and_then(|value| logging::parse_level(&value))
        .unwrap_or(LevelFilter::Warn);
    logging::level_from_verbosity(base, args.verbose)
}
