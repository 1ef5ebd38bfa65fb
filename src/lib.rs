//! Treecat - flatten every file with a given suffix under a directory into one text file

pub mod concat;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use concat::concatenate;
pub use file_utils::{FileContents, read_file_contents};
pub use output::{BlockWriter, RunSummary, print_summary, print_summary_json};
pub use walk::{BlockSink, ConcatConfig, SuffixWalker, WalkStats};
