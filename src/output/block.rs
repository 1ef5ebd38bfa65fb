//! Block rendering for the concatenated artifact
//!
//! Each matched file becomes:
//!
//! ```text
//! === Directory: <folder> ===
//! --- File: <name> ---
//! <contents, or the read-error placeholder>
//!
//! ```

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::file_utils::FileContents;
use crate::walk::BlockSink;

/// Writes blocks into any `Write` implementation, usually a buffered file.
pub struct BlockWriter<W: Write> {
    out: W,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The line written in place of a body that could not be read.
pub fn error_placeholder(err: &io::Error) -> String {
    format!("[Error reading file: {}]\n", err)
}

impl<W: Write> BlockSink for BlockWriter<W> {
    fn write_block(
        &mut self,
        folder: &Path,
        file_name: &str,
        contents: &FileContents,
    ) -> io::Result<()> {
        writeln!(self.out, "=== Directory: {} ===", folder.display())?;
        writeln!(self.out, "--- File: {} ---", file_name)?;
        match contents {
            Ok(text) => self.out.write_all(text.as_bytes())?,
            Err(e) => self.out.write_all(error_placeholder(e).as_bytes())?,
        }
        self.out.write_all(b"\n\n")?;
        debug!(folder = %folder.display(), file = file_name, "wrote block");
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
