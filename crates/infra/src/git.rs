// crates/infra/src/git.rs
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::debug;
use verstamp_ports::revision::{ProbeRequest, RevisionProbe};
use verstamp_shared_kernel::{InfraResult, InfrastructureError, Result};

pub const MIN_ABBREV: usize = 4;
pub const MAX_ABBREV: usize = 40;

/// Determines the revision of a work tree by asking the `git` executable.
#[derive(Debug, Clone)]
pub struct GitRevisionProbe {
    program: OsString,
}

impl Default for GitRevisionProbe {
    fn default() -> Self {
        Self { program: OsString::from("git") }
    }
}

impl GitRevisionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different executable, e.g. an absolute path to `git`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    /// Runs git in `dir`. `Ok(None)` means git itself is not installed.
    fn run(&self, dir: &Path, args: &[&str]) -> InfraResult<Option<Output>> {
        match Command::new(&self.program).args(args).current_dir(dir).output() {
            Ok(output) => Ok(Some(output)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} is not available: {err}", self.program.to_string_lossy());
                Ok(None)
            }
            Err(err) => Err(git_error(args, err.to_string())),
        }
    }

    /// `--no-optional-locks` keeps status from refreshing `.git/index`,
    /// which is itself one of the watched paths.
    fn is_dirty(&self, dir: &Path) -> InfraResult<bool> {
        let args = ["--no-optional-locks", "status", "--porcelain", "--untracked-files=no"];
        let Some(output) = self.run(dir, &args)? else {
            return Ok(false);
        };
        if !output.status.success() {
            return Err(git_error(&args, String::from_utf8_lossy(&output.stderr).trim().to_string()));
        }
        Ok(!output.stdout.iter().all(u8::is_ascii_whitespace))
    }

    /// The ref `HEAD` points to, e.g. `refs/heads/main`. `None` when `HEAD`
    /// is detached or `dir` is not inside a repository.
    fn head_ref(&self, dir: &Path) -> InfraResult<Option<String>> {
        let Some(output) = self.run(dir, &["symbolic-ref", "--quiet", "HEAD"])? else {
            return Ok(None);
        };
        if !output.status.success() {
            return Ok(None);
        }
        let reference = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!reference.is_empty()).then_some(reference))
    }

    /// Files whose change means the revision may have changed: `HEAD`, the
    /// ref it points to, `packed-refs` and, when dirtiness is tracked, the
    /// index. Locations come from `git rev-parse --git-path`, so linked
    /// worktrees resolve refs in the common directory.
    ///
    /// Only existing paths are returned; Cargo reruns a build script on
    /// every build while a watched path is missing. A branch whose ref is
    /// packed is covered through its parent directory, where the loose ref
    /// reappears on the next commit. Unstaged edits do not touch any of
    /// these files, so `-dirty` is refreshed once they are staged or when
    /// something else reruns the build script.
    pub fn watch_paths(&self, request: &ProbeRequest) -> InfraResult<Vec<PathBuf>> {
        let dir = &request.repo_dir;
        let mut names = vec!["HEAD".to_string()];
        if let Some(reference) = self.head_ref(dir)? {
            names.push(reference);
        }
        names.push("packed-refs".to_string());
        if request.mark_dirty {
            names.push("index".to_string());
        }

        let mut args = vec!["rev-parse"];
        for name in &names {
            args.extend(["--git-path", name.as_str()]);
        }
        let Some(output) = self.run(dir, &args)? else {
            return Ok(Vec::new());
        };
        if !output.status.success() {
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut paths = Vec::new();
        for (name, line) in names.iter().zip(stdout.lines()) {
            // Relative results are relative to `dir`.
            let path = dir.join(line.trim());
            if path.exists() {
                paths.push(path);
            } else if name.starts_with("refs/") {
                if let Some(parent) = path.parent().filter(|p| p.is_dir()) {
                    paths.push(parent.to_path_buf());
                }
            } else {
                debug!("not watching missing {}", path.display());
            }
        }
        Ok(paths)
    }
}

impl RevisionProbe for GitRevisionProbe {
    fn probe(&self, request: &ProbeRequest) -> Result<Option<String>> {
        let dir = &request.repo_dir;
        if !dir.is_dir() {
            return Err(InfrastructureError::GitError {
                operation: "rev-parse".to_string(),
                details: format!("'{}' is not a directory", dir.display()),
            }
            .into());
        }

        let abbrev = request.abbrev.clamp(MIN_ABBREV, MAX_ABBREV);
        let short = format!("--short={abbrev}");
        let args = ["rev-parse", "--verify", "--quiet", short.as_str(), "HEAD"];
        let Some(output) = self.run(dir, &args)? else {
            return Ok(None);
        };
        if !output.status.success() {
            // Not a repository, or a repository without commits.
            debug!(
                "git rev-parse failed in {}: {}",
                dir.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        let mut hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if hash.is_empty() {
            return Ok(None);
        }
        if request.mark_dirty && self.is_dirty(dir)? {
            hash.push_str("-dirty");
        }
        Ok(Some(hash))
    }
}

fn git_error(args: &[&str], details: String) -> InfrastructureError {
    InfrastructureError::GitError { operation: format!("git {}", args.join(" ")), details }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok_and(|o| o.status.success())
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=verstamp", "-c", "user.email=verstamp@example.invalid"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }

    fn repo_with_commit() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "--quiet"]);
        fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        git(dir.path(), &["add", "a.txt"]);
        git(dir.path(), &["commit", "--quiet", "-m", "init"]);
        dir
    }

    #[test]
    fn missing_program_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let probe = GitRevisionProbe::with_program("verstamp-no-such-git");
        assert_eq!(probe.probe(&ProbeRequest::new(dir.path())).unwrap(), None);
        assert!(probe.watch_paths(&ProbeRequest::new(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = ProbeRequest::new(dir.path().join("nope"));
        assert!(GitRevisionProbe::new().probe(&request).is_err());
    }

    #[test]
    fn short_hash_of_head() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        let mut request = ProbeRequest::new(repo.path());
        request.abbrev = 10;

        let hash = GitRevisionProbe::new().probe(&request).unwrap().unwrap();
        assert!(hash.len() >= 10, "{hash}");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()), "{hash}");
    }

    #[test]
    fn dirty_suffix_only_when_modified() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        let mut request = ProbeRequest::new(repo.path());
        request.mark_dirty = true;

        let clean = GitRevisionProbe::new().probe(&request).unwrap().unwrap();
        assert!(!clean.ends_with("-dirty"));

        fs::write(repo.path().join("a.txt"), "two\n").unwrap();
        let dirty = GitRevisionProbe::new().probe(&request).unwrap().unwrap();
        assert_eq!(dirty, format!("{clean}-dirty"));
    }

    #[test]
    fn watch_paths_follow_head() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        let paths = GitRevisionProbe::new().watch_paths(&ProbeRequest::new(repo.path())).unwrap();
        assert!(paths[0].ends_with("HEAD"));
        assert!(paths.iter().any(|p| p.to_string_lossy().contains("refs/heads")));
    }

    fn assert_all_exist(paths: &[PathBuf]) {
        let missing: Vec<_> = paths.iter().filter(|p| !p.exists()).collect();
        assert!(missing.is_empty(), "watching missing paths: {missing:?}");
    }

    #[test]
    fn watch_paths_exist_in_fresh_repository() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        let mut request = ProbeRequest::new(repo.path());
        request.mark_dirty = true;

        let paths = GitRevisionProbe::new().watch_paths(&request).unwrap();
        assert_all_exist(&paths);
        assert!(paths.iter().any(|p| p.ends_with("index")));
    }

    #[test]
    fn watch_paths_exist_after_packing_refs() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        git(repo.path(), &["pack-refs", "--all"]);

        let paths = GitRevisionProbe::new().watch_paths(&ProbeRequest::new(repo.path())).unwrap();
        assert_all_exist(&paths);
        assert!(paths.iter().any(|p| p.ends_with("packed-refs")));
    }

    #[test]
    fn watch_paths_in_linked_worktree_use_common_refs() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        let worktree = tempfile::tempdir().unwrap();
        let worktree_dir = worktree.path().join("side");
        git(repo.path(), &["worktree", "add", "-b", "side", worktree_dir.to_str().unwrap()]);

        let paths = GitRevisionProbe::new().watch_paths(&ProbeRequest::new(&worktree_dir)).unwrap();
        assert_all_exist(&paths);
        assert!(paths[0].ends_with("HEAD"));
        assert!(paths.iter().any(|p| p.ends_with("refs/heads/side")), "{paths:?}");
    }

    #[test]
    fn dirty_check_leaves_index_untouched() {
        if !git_available() {
            return;
        }
        let repo = repo_with_commit();
        fs::write(repo.path().join("a.txt"), "two\n").unwrap();
        let index = repo.path().join(".git/index");
        let before = fs::metadata(&index).unwrap().modified().unwrap();

        let probe = GitRevisionProbe::new();
        assert!(probe.is_dirty(repo.path()).unwrap());
        assert!(probe.is_dirty(repo.path()).unwrap());

        assert_eq!(fs::metadata(&index).unwrap().modified().unwrap(), before);
    }
}
