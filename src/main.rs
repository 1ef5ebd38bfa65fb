//! CLI entry point for treecat

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treecat::walk::{DEFAULT_OUTPUT, DEFAULT_SUFFIX};
use treecat::{ConcatConfig, concatenate, logging, print_summary, print_summary_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treecat")]
#[command(about = "Concatenate every file with a given suffix under a directory into one text file")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File-name suffix to include (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Output file, overwritten on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the run summary as JSON instead of the confirmation line
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    logging::init();

    if !args.path.is_dir() {
        eprintln!(
            "treecat: warning: cannot access '{}': not a directory",
            args.path.display()
        );
    }

    let config = ConcatConfig::new(args.path, args.suffix, args.output);

    let summary = match concatenate(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!(
                "treecat: error writing '{}': {}",
                config.output_path.display(),
                e
            );
            process::exit(1);
        }
    };

    let result = if args.json {
        print_summary_json(&summary)
    } else {
        print_summary(&summary, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("treecat: error writing summary: {}", e);
        process::exit(1);
    }
}
