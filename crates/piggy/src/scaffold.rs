//! Scaffold planning — validates the target directory and resolves where a
//! new project would be created. Nothing here writes to the filesystem.

use std::io;
use std::path::{Path, PathBuf};

/// Result of planning a scaffold. `InvalidDir` is an ordinary outcome, not
/// an error: the original tool reports it and exits 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The directory exists; carries the absolute project path.
    Ready(PathBuf),
    /// The directory is missing or not a directory.
    InvalidDir,
}

/// Check `dir` and resolve the absolute path of the project that would be
/// created as `dir/pkg`.
///
/// `pkg` is used only as a path segment and is not validated; an absolute
/// `pkg` replaces `dir` entirely (`Path::join` semantics). The only fallible
/// step is absolutization, which requires a current working directory.
pub fn plan(dir: &Path, pkg: &str) -> io::Result<Outcome> {
    if !dir.is_dir() {
        return Ok(Outcome::InvalidDir);
    }

    let project_path = std::path::absolute(dir.join(pkg))?;
    Ok(Outcome::Ready(project_path))
}
