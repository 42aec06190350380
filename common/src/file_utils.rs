//! Output path helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Creates `dir` (and parents) if missing and returns it.
pub fn ensure_dir(dir: &Path) -> io::Result<&Path> {
    fs::create_dir_all(dir)?;
    Ok(dir)
}

/// Joins `name` onto `dir`, appending `extension` when `name` has none.
pub fn output_file(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let path = dir.join(name);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(extension)
    }
}
