// crates/infra/src/cargo.rs
//! `cargo:` instructions printed by build scripts.

use std::io::{self, Write};
use std::path::Path;

/// Collects build-script instructions and prints them in one go.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Directives {
    lines: Vec<String>,
}

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rerun_if_changed(&mut self, path: &Path) -> &mut Self {
        self.push(format!("cargo:rerun-if-changed={}", path.display()))
    }

    pub fn rerun_if_env_changed(&mut self, name: &str) -> &mut Self {
        self.push(format!("cargo:rerun-if-env-changed={name}"))
    }

    /// Exposes `value` to the crate being built as `env!(key)`.
    pub fn rustc_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.push(format!("cargo:rustc-env={key}={value}"))
    }

    pub fn warning(&mut self, message: &str) -> &mut Self {
        // Cargo reads one instruction per line.
        for line in message.lines() {
            self.lines.push(format!("cargo:warning={line}"));
        }
        self
    }

    fn push(&mut self, line: String) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    /// Prints to stdout, where Cargo picks the instructions up.
    pub fn emit(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_instructions_in_order() {
        let mut d = Directives::new();
        d.rerun_if_changed(Path::new(".git/HEAD"))
            .rerun_if_env_changed("VERSTAMP_REVISION")
            .rustc_env("VERSTAMP_GIT_HASH", "a1b2c3d")
            .warning("first\nsecond");

        let mut out = Vec::new();
        d.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cargo:rerun-if-changed=.git/HEAD\n\
             cargo:rerun-if-env-changed=VERSTAMP_REVISION\n\
             cargo:rustc-env=VERSTAMP_GIT_HASH=a1b2c3d\n\
             cargo:warning=first\n\
             cargo:warning=second\n"
        );
    }
}
