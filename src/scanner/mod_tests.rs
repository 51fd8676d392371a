use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct RustOnlyFilter;

impl FileFilter for RustOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "rs")
    }
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("test.rs"), "fn main() {}").unwrap();
    std::fs::write(temp_dir.path().join("lib.rs"), "pub fn foo() {}").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("lib.rs"));
    assert!(files[1].ends_with("test.rs"));
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("main.rs"), "fn main() {}").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.rs"));
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("test.rs"), "").unwrap();
    std::fs::write(temp_dir.path().join("test.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(RustOnlyFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("test.rs"));
}

#[test]
fn scanner_with_gitignore_skips_ignored_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".gitignore"), "ignored.rs\nbuild/\n").unwrap();
    std::fs::write(temp_dir.path().join("kept.rs"), "").unwrap();
    std::fs::write(temp_dir.path().join("ignored.rs"), "").unwrap();
    std::fs::create_dir(temp_dir.path().join("build")).unwrap();
    std::fs::write(temp_dir.path().join("build/out.rs"), "").unwrap();

    let scanner = DirectoryScanner::new(RustOnlyFilter).with_gitignore(true);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("kept.rs"));
}

#[test]
fn scanner_without_gitignore_includes_ignored_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".gitignore"), "ignored.rs\n").unwrap();
    std::fs::write(temp_dir.path().join("kept.rs"), "").unwrap();
    std::fs::write(temp_dir.path().join("ignored.rs"), "").unwrap();

    let scanner = DirectoryScanner::new(RustOnlyFilter).with_gitignore(false);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_with_glob_filter_excludes() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("vendor")).unwrap();
    std::fs::write(temp_dir.path().join("vendor/dep.rs"), "").unwrap();
    std::fs::write(temp_dir.path().join("main.rs"), "").unwrap();

    let filter = GlobFilter::new(&[], &["**/vendor/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter).scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("main.rs"));
}

#[test]
fn scanning_a_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = DirectoryScanner::new(AcceptAllFilter);

    assert!(scanner.scan(&temp_dir.path().join("missing")).is_err());
}
