use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::cli::ScanArgs;
use crate::config::Config;
use crate::output::ColorMode;

fn quiet_reporter() -> Reporter {
    Reporter::new(ColorMode::Never, true, 0)
}

fn count_dir(dir: &TempDir) -> (CountReport, bool) {
    let args = ScanArgs {
        paths: vec![dir.path().to_path_buf()],
        ..ScanArgs::default()
    };
    let context = ScanContext::new(&Config::default(), &args).unwrap();
    let files = context.collect_files(&args.paths).unwrap();
    count_files(&context, &files, &quiet_reporter())
}

#[test]
fn counts_each_known_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.rs"),
        "// header\n\nfn main() {\n    let url = \"http://x\";\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.py"), "# one\nx = 1\n").unwrap();

    let (report, any_failed) = count_dir(&dir);

    assert!(!any_failed);
    assert_eq!(report.files.len(), 2);
    let rust = &report.files[0];
    assert_eq!(rust.language, "Rust");
    assert_eq!(rust.stats.total, 5);
    assert_eq!(rust.stats.code, 3);
    assert_eq!(rust.stats.comment, 1);
    assert_eq!(rust.stats.blank, 1);
    assert_eq!(report.total.total, 7);
    assert_eq!(report.total.comment, 2);
}

#[test]
fn ignore_file_directive_moves_file_to_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("gen.rs"),
        "// comment-scan:ignore-file\nfn generated() {}\n",
    )
    .unwrap();
    fs::write(dir.path().join("lib.rs"), "fn lib() {}\n").unwrap();

    let (report, any_failed) = count_dir(&dir);

    assert!(!any_failed);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.ignored, vec![dir.path().join("gen.rs")]);
}

#[test]
fn unreadable_explicit_file_fails_run() {
    let context = ScanContext::new(&Config::default(), &ScanArgs::default()).unwrap();
    let files = vec![SourceFile {
        path: PathBuf::from("/definitely/not/here.rs"),
        explicit: true,
    }];

    let (report, any_failed) = count_files(&context, &files, &quiet_reporter());

    assert!(any_failed);
    assert!(report.files.is_empty());
}

#[test]
fn empty_directory_counts_nothing() {
    let dir = TempDir::new().unwrap();

    let (report, any_failed) = count_dir(&dir);

    assert!(!any_failed);
    assert_eq!(report, CountReport::default());
}
