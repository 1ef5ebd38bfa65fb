//! Configuration for a concatenation run

use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = ".dart";
pub const DEFAULT_OUTPUT: &str = "all_dart_code.txt";

/// What to scan, what to match, and where to write the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatConfig {
    /// Directory the traversal starts from. Markers are printed relative to
    /// this path exactly as given.
    pub root_path: PathBuf,
    /// Case-sensitive file-name ending. An empty suffix matches every file.
    pub suffix: String,
    /// Artifact path, truncated before the walk starts.
    pub output_path: PathBuf,
}

impl ConcatConfig {
    pub fn new(
        root_path: impl Into<PathBuf>,
        suffix: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            suffix: suffix.into(),
            output_path: output_path.into(),
        }
    }

    /// Check whether a file name ends with the configured suffix.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
