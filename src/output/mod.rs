//! Artifact and console output
//!
//! - `block` - renders matched files into the concatenated artifact
//! - `summary` - run summary, printed as a colored line or JSON

mod block;
mod summary;

pub use block::{BlockWriter, error_placeholder};
pub use summary::{RunSummary, print_summary, print_summary_json, write_summary};
