// crates/infra/src/logging.rs
//! Backends for the `log` facade.
//!
//! Lines read `[level] message`, the same shape the CLI uses for its own
//! stderr diagnostics.

use std::io::Write;
use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::cargo::Directives;

/// Writes `[level] message` lines to stderr.
pub struct StderrLogger;

/// For build scripts: warnings and errors become `cargo:warning=` lines so
/// Cargo shows them; everything else goes to stderr, which Cargo keeps in the
/// build script's output file.
pub struct CargoWarningLogger;

static STDERR_LOGGER: StderrLogger = StderrLogger;
static CARGO_LOGGER: CargoWarningLogger = CargoWarningLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", format_line(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

impl Log for CargoWarningLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            let _ = warning_directives(record).emit();
        } else {
            let _ = writeln!(std::io::stderr().lock(), "{}", format_line(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

fn warning_directives(record: &Record<'_>) -> Directives {
    let mut directives = Directives::new();
    directives.warning(&record.args().to_string());
    directives
}

fn format_line(record: &Record<'_>) -> String {
    format!("[{}] {}", record.level().as_str().to_ascii_lowercase(), record.args())
}

/// Installs [`StderrLogger`]. A logger installed earlier is kept.
pub fn init_stderr(level: LevelFilter) {
    if log::set_logger(&STDERR_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Installs [`CargoWarningLogger`]. A logger installed earlier is kept.
pub fn init_cargo(level: LevelFilter) {
    if log::set_logger(&CARGO_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Parses a level name such as `debug`; unknown names yield `None`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(name.trim()).ok()
}

/// Level for `-v` repetitions on top of `base`.
pub fn level_from_verbosity(base: LevelFilter, verbose: u8) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(2);
    levels[(start + usize::from(verbose)).min(levels.len() - 1)]
}
