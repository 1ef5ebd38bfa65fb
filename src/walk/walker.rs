//! SuffixWalker - streams matching files to a sink in a fixed order

use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::file_utils::{FileContents, read_file_contents, same_file};

use super::config::ConcatConfig;

/// Callback for streaming output - receives one call per matched file.
pub trait BlockSink {
    fn write_block(
        &mut self,
        folder: &Path,
        file_name: &str,
        contents: &FileContents,
    ) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Counters collected while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub blocks: usize,
    pub read_errors: usize,
    pub directories: usize,
    pub unreadable_directories: usize,
}

/// Top-down walker. Within each directory, entries are sorted by name; the
/// directory's matching files are emitted before any subdirectory is entered.
/// Symlinked directories are never descended, so link cycles cannot recurse.
pub struct SuffixWalker {
    config: ConcatConfig,
    excluded: Option<PathBuf>,
}

impl SuffixWalker {
    pub fn new(config: ConcatConfig) -> Self {
        Self {
            config,
            excluded: None,
        }
    }

    /// Never emit a block for this file, even if it matches.
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded = Some(path.into());
        self
    }

    pub fn config(&self) -> &ConcatConfig {
        &self.config
    }

    /// Walk the configured root, feeding every match to `sink`, then call
    /// `finish`. Only sink errors abort the walk.
    pub fn walk_streaming<S: BlockSink>(&self, sink: &mut S) -> io::Result<WalkStats> {
        let mut stats = WalkStats::default();
        self.walk_dir(self.config.root(), sink, &mut stats)?;
        sink.finish()?;
        Ok(stats)
    }

    fn walk_dir<S: BlockSink>(
        &self,
        dir: &Path,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> io::Result<()> {
        let Some(entries) = read_sorted_entries(dir) else {
            stats.unreadable_directories += 1;
            return Ok(());
        };
        stats.directories += 1;
        debug!(dir = %dir.display(), entries = entries.len(), "entering directory");

        let mut subdirs = Vec::new();

        for entry in entries {
            let entry_path = entry.path();

            if entry_path.is_dir() {
                if is_symlink(&entry) {
                    debug!(path = %entry_path.display(), "not following symlinked directory");
                } else {
                    subdirs.push(entry_path);
                }
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.matches(&name) {
                continue;
            }
            if self.is_excluded(&entry_path) {
                debug!(path = %entry_path.display(), "skipping output file");
                continue;
            }

            let contents = read_file_contents(&entry_path);
            if let Err(e) = &contents {
                warn!(path = %entry_path.display(), error = %e, "failed to read file");
                stats.read_errors += 1;
            }
            sink.write_block(dir, &name, &contents)?;
            stats.blocks += 1;
        }

        for subdir in subdirs {
            self.walk_dir(&subdir, sink, stats)?;
        }

        Ok(())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(excluded) = &self.excluded else {
            return false;
        };
        // Compare names before canonicalizing
        if path.file_name() != excluded.file_name() {
            return false;
        }
        same_file(path, excluded)
    }
}

/// Read and sort directory entries, or `None` if the directory can't be listed.
fn read_sorted_entries(dir: &Path) -> Option<Vec<DirEntry>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory");
            return None;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    Some(entries)
}

fn is_symlink(entry: &DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_symlink())
}
