//! File reading for matched entries
//!
//! Each matched file is read in one call, so the input handle never outlives
//! the read. The outcome is kept as a `Result` and handed to the renderer,
//! which decides how a failure shows up in the artifact.

use std::io;
use std::path::Path;

/// Outcome of reading one matched file.
pub type FileContents = Result<String, io::Error>;

/// Read a file's entire contents as UTF-8 text.
///
/// Fails for missing files, permission errors, directories, broken symlinks
/// and content that is not valid UTF-8.
pub fn read_file_contents(path: &Path) -> FileContents {
    std::fs::read_to_string(path)
}

/// Compare two paths by their canonical form, falling back to a plain
/// comparison when either cannot be resolved.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
