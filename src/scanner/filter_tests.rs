use std::path::Path;

use super::*;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(&["rs".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("src/main.py")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = GlobFilter::new(&["rs".to_string(), "go".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("main.go")));
    assert!(!filter.should_include(Path::new("main.py")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(&[], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("main.py")));
    assert!(filter.should_include(Path::new("readme.txt")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        &["rs".to_string()],
        &["**/target/**".to_string(), "**/generated/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("target/debug/main.rs")));
    assert!(!filter.should_include(Path::new("src/generated/code.rs")));
}

#[test]
fn filter_exclude_specific_files() {
    let filter =
        GlobFilter::new(&["rs".to_string()], &["**/*.generated.rs".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("src/code.generated.rs")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(&[], &["[invalid".to_string()]);
    assert!(result.is_err());
}

#[test]
fn filter_complex_exclude_patterns() {
    let filter = GlobFilter::new(
        &["rs".to_string()],
        &[
            "**/target/**".to_string(),
            "**/node_modules/**".to_string(),
            "**/.git/**".to_string(),
        ],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/lib.rs")));
    assert!(!filter.should_include(Path::new("target/release/build/main.rs")));
    assert!(!filter.should_include(Path::new(".git/hooks/pre-commit.rs")));
}

#[test]
fn filter_file_without_extension_accepted_when_empty_extensions() {
    let filter = GlobFilter::new(&[], &[]).unwrap();

    assert!(filter.should_include(Path::new("Makefile")));
    assert!(filter.should_include(Path::new("Dockerfile")));
    assert!(filter.should_include(Path::new(".gitignore")));
}

#[test]
fn filter_file_without_extension_rejected_when_extensions_set() {
    let filter = GlobFilter::new(&["rs".to_string()], &[]).unwrap();

    assert!(!filter.should_include(Path::new("Makefile")));
    assert!(!filter.should_include(Path::new("Dockerfile")));
}

#[test]
fn filter_exclude_by_filename() {
    let filter = GlobFilter::new(&[], &["*.lock".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("Cargo.toml")));
    assert!(!filter.should_include(Path::new("Cargo.lock")));
}

#[test]
fn filter_extensions_ignore_case_and_leading_dot() {
    let filter = GlobFilter::new(&[".RS".to_string(), "Py".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(filter.should_include(Path::new("SCRIPT.PY")));
    assert!(!filter.should_include(Path::new("main.go")));
}

#[test]
fn invalid_pattern_error_names_the_pattern() {
    let Err(err) = GlobFilter::new(&[], &["ok/**".to_string(), "a[".to_string()]) else {
        panic!("expected an invalid pattern error");
    };

    assert_eq!(err.error_type(), "Pattern");
    assert!(err.to_string().contains("a["));
}

#[test]
fn filter_exclude_ignores_leading_dot_component() {
    let filter = GlobFilter::new(&[], &["target/**".to_string()]).unwrap();

    assert!(filter.is_excluded(Path::new("target/a.rs")));
    assert!(filter.is_excluded(Path::new("./target/a.rs")));
    assert!(!filter.is_excluded(Path::new("./src/a.rs")));
    assert!(!filter.is_excluded(Path::new("../target/a.rs")));
}
