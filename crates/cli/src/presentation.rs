// crates/cli/src/presentation.rs
use std::io::{self, Write};
use std::path::Path;

use verstamp::VersionStamp;
use verstamp::placeholders::Placeholder;

pub fn print_generated(contents: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(contents.as_bytes())?;
    out.flush()
}

pub fn print_stamp(stamp: &VersionStamp, json: bool) -> verstamp::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stamp)?);
    } else {
        println!("{stamp}");
    }
    Ok(())
}

/// `path:line: token`, the shape compilers use, so editors can jump to it.
pub fn format_placeholder(path: &Path, placeholder: &Placeholder) -> String {
    format!("{}:{}: unresolved placeholder {}", path.display(), placeholder.line, placeholder.token)
}

pub fn print_placeholders(path: &Path, found: &[Placeholder]) {
    for placeholder in found {
        eprintln!("{}", format_placeholder(path, placeholder));
    }
}
