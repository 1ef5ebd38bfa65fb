//! Directory traversal
//!
//! `SuffixWalker` visits the tree in a fixed order and streams every file
//! whose name ends with the configured suffix to a `BlockSink`. Nothing is
//! buffered beyond the entries of the directory currently being listed.

mod config;
mod walker;

pub use config::{ConcatConfig, DEFAULT_OUTPUT, DEFAULT_SUFFIX};
pub use walker::{BlockSink, SuffixWalker, WalkStats};
