// crates/infra/src/persistence/file_writer.rs
use std::{fs, fs::File, io::{BufWriter, Write}, path::Path};

use verstamp_ports::artifact::{ArtifactSink, WriteOutcome};
use verstamp_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => return Err(std::io::Error::other("path has no parent")),
        };

        // Unique temp name in the same directory so the rename stays atomic.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    /// Whether `path` already holds exactly `data`.
    pub fn has_contents<P: AsRef<Path>>(path: P, data: &[u8]) -> bool {
        fs::read(path.as_ref()).is_ok_and(|existing| existing == data)
    }
}

/// Writes generated files to disk, leaving up-to-date files untouched so
/// their modification time does not trigger rebuilds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileArtifactSink;

impl ArtifactSink for FileArtifactSink {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<WriteOutcome> {
        if FileWriter::has_contents(path, contents) {
            return Ok(WriteOutcome::Unchanged);
        }

        let write_err = |source| InfrastructureError::FileWrite { path: path.to_owned(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        FileWriter::atomic_write(path, contents).map_err(write_err)?;
        Ok(WriteOutcome::Written)
    }
}
