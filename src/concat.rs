//! Top-level concatenation run

use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use tracing::info;

use crate::output::{BlockWriter, RunSummary};
use crate::walk::{ConcatConfig, SuffixWalker};

/// Truncate the output file, stream every matching file under the root into
/// it, and report what was written.
///
/// Unreadable input files end up as placeholders inside the artifact and do
/// not fail the run. Failing to create or write the output does.
pub fn concatenate(config: &ConcatConfig) -> io::Result<RunSummary> {
    let started = Instant::now();
    info!(
        root = %config.root_path.display(),
        suffix = %config.suffix,
        output = %config.output_path.display(),
        "starting concatenation"
    );

    let file = File::create(&config.output_path)?;
    let mut writer = BlockWriter::new(BufWriter::new(file));

    let walker = SuffixWalker::new(config.clone()).excluding(&config.output_path);
    let stats = walker.walk_streaming(&mut writer)?;

    let summary = RunSummary::new(config, stats, started.elapsed());
    info!(
        blocks = summary.blocks,
        read_errors = summary.read_errors,
        directories = summary.directories,
        "concatenation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn run(root: &Path, suffix: &str, out_dir: &TempDir) -> (String, RunSummary) {
        let output = out_dir.path().join("all.txt");
        let config = ConcatConfig::new(root, suffix, &output);
        let summary = concatenate(&config).expect("run should succeed");
        (fs::read_to_string(&output).unwrap(), summary)
    }

    #[test]
    fn test_dart_scenario() {
        let tree = TestTree::new();
        tree.add_file("a/x.dart", "void main(){}");
        tree.add_file("a/b/y.txt", "irrelevant");
        tree.add_file("a/b/z.dart", "class Z{}");
        let out = TempDir::new().unwrap();

        let (text, summary) = run(&tree.path().join("a"), ".dart", &out);

        let a = tree.path().join("a");
        let b = a.join("b");
        let expected = format!(
            "=== Directory: {} ===\n--- File: x.dart ---\nvoid main(){{}}\n\n\
             === Directory: {} ===\n--- File: z.dart ---\nclass Z{{}}\n\n",
            a.display(),
            b.display()
        );
        assert_eq!(text, expected);
        assert!(!text.contains("y.txt"));
        assert_eq!(summary.blocks, 2);
        assert_eq!(summary.read_errors, 0);
    }

    #[test]
    fn test_one_block_per_matching_file() {
        let tree = TestTree::new();
        for i in 0..5 {
            tree.add_file(&format!("d{}/f{}.dart", i % 2, i), &format!("body {}", i));
            tree.add_file(&format!("d{}/f{}.rs", i % 2, i), "nope");
        }
        let out = TempDir::new().unwrap();

        let (text, summary) = run(tree.path(), ".dart", &out);
        assert_eq!(text.matches("=== Directory: ").count(), 5);
        assert_eq!(text.matches("--- File: ").count(), 5);
        assert!(!text.contains(".rs ---"));
        assert_eq!(summary.blocks, 5);
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let tree = TestTree::new();
        tree.add_file("lib/main.dart", "void main() {}\n");
        tree.add_file("lib/src/a.dart", "class A {}\n");
        tree.add_file("lib/src/b.dart", "class B {}\n");
        let out = TempDir::new().unwrap();

        let (first, _) = run(tree.path(), ".dart", &out);
        let (second, _) = run(tree.path(), ".dart", &out);
        assert_eq!(first, second);
    }

    #[test]
    fn test_previous_output_is_replaced() {
        let tree = TestTree::new();
        tree.add_file("only.dart", "x");
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("all.txt"), "stale content from an earlier run\n").unwrap();

        let (text, _) = run(tree.path(), ".dart", &out);
        assert!(!text.contains("stale content"));
        assert!(text.starts_with("=== Directory: "));
    }

    #[test]
    fn test_empty_tree_gives_empty_artifact() {
        let tree = TestTree::new();
        tree.add_dir("empty/nested");
        tree.add_file("readme.md", "# hi");
        let out = TempDir::new().unwrap();

        let (text, summary) = run(tree.path(), ".dart", &out);
        assert!(text.is_empty());
        assert_eq!(summary.blocks, 0);
    }

    #[test]
    fn test_missing_root_gives_empty_artifact() {
        let tree = TestTree::new();
        let out = TempDir::new().unwrap();

        let (text, summary) = run(&tree.path().join("does-not-exist"), ".dart", &out);
        assert!(text.is_empty());
        assert_eq!(summary.unreadable_directories, 1);
    }

    #[test]
    fn test_output_inside_root_is_not_included() {
        let tree = TestTree::new();
        tree.add_file("a.dart", "a");
        let output = tree.path().join("zz_out.dart");
        fs::write(&output, "old run").unwrap();

        let config = ConcatConfig::new(tree.path(), ".dart", &output);
        let summary = concatenate(&config).unwrap();
        let text = fs::read_to_string(&output).unwrap();

        assert_eq!(summary.blocks, 1);
        assert!(!text.contains("zz_out.dart"));
        assert!(!text.contains("old run"));
    }

    #[test]
    fn test_invalid_utf8_becomes_placeholder() {
        let tree = TestTree::new();
        tree.add_bytes("a.dart", &[0xC3, 0x28]);
        tree.add_file("b.dart", "still here");
        let out = TempDir::new().unwrap();

        let (text, summary) = run(tree.path(), ".dart", &out);
        assert!(text.contains("--- File: a.dart ---\n[Error reading file: "));
        assert!(text.contains("--- File: b.dart ---\nstill here\n\n"));
        assert_eq!(summary.read_errors, 1);
        assert_eq!(summary.blocks, 2);
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_file_becomes_placeholder() {
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        let secret = tree.add_file("a/secret.dart", "hidden");
        tree.add_file("b/after.dart", "visible");

        let mut perms = fs::metadata(&secret).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&secret, perms).unwrap();

        // Privileged users can read regardless of mode bits
        if fs::read(&secret).is_ok() {
            return;
        }

        let out = TempDir::new().unwrap();
        let (text, summary) = run(tree.path(), ".dart", &out);

        let mut perms = fs::metadata(&secret).unwrap().permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&secret, perms).unwrap();

        assert!(text.contains("--- File: secret.dart ---\n[Error reading file: "));
        assert!(!text.contains("hidden"));
        assert!(text.contains("--- File: after.dart ---\nvisible\n\n"));
        assert_eq!(summary.read_errors, 1);
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let tree = TestTree::new();
        tree.add_file("a.dart", "a");
        let output = tree.path().join("no-such-dir").join("out.txt");

        let config = ConcatConfig::new(tree.path(), ".dart", &output);
        let err = concatenate(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
