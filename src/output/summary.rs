//! Run summary and the console confirmation line

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::{ConcatConfig, WalkStats};

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub suffix: String,
    pub output: PathBuf,
    /// Blocks written, one per matched file.
    pub blocks: usize,
    /// Blocks whose body is the error placeholder.
    pub read_errors: usize,
    pub directories: usize,
    pub unreadable_directories: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl RunSummary {
    pub fn new(config: &ConcatConfig, stats: WalkStats, elapsed: Duration) -> Self {
        Self {
            root: config.root_path.clone(),
            suffix: config.suffix.clone(),
            output: config.output_path.clone(),
            blocks: stats.blocks,
            read_errors: stats.read_errors,
            directories: stats.directories,
            unreadable_directories: stats.unreadable_directories,
            elapsed,
        }
    }

    /// The confirmation text, without color.
    pub fn confirmation(&self) -> String {
        format!(
            "All {} code from {} written to {} ({} {}, {} unreadable, {})",
            self.suffix,
            self.root.display(),
            self.output.display(),
            self.blocks,
            if self.blocks == 1 { "file" } else { "files" },
            self.read_errors,
            format_elapsed(self.elapsed),
        )
    }
}

/// Round to milliseconds so the output isn't littered with nanoseconds.
fn format_elapsed(elapsed: Duration) -> String {
    let millis = Duration::from_millis(elapsed.as_millis() as u64);
    if millis.is_zero() {
        "<1ms".to_string()
    } else {
        humantime::format_duration(millis).to_string()
    }
}

/// Print the confirmation line to stdout.
pub fn print_summary(summary: &RunSummary, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_summary(&mut stdout, summary)
}

/// Write the confirmation line; the check mark turns yellow when some
/// blocks hold placeholders.
pub fn write_summary<W: WriteColor>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let color = if summary.read_errors == 0 {
        Color::Green
    } else {
        Color::Yellow
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "✅")?;
    out.reset()?;
    writeln!(out, " {}", summary.confirmation())?;
    Ok(())
}

/// Print the summary as pretty-printed JSON to stdout.
pub fn print_summary_json(summary: &RunSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
