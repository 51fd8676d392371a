use std::path::PathBuf;

use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let result = render(|buf| out.write_error(buf, "Config", "bad value", None, None));
    assert_eq!(result, "✖ Config: bad value\n");
}

#[test]
fn error_without_colors_with_detail() {
    let out = make_output(false);
    let result = render(|buf| {
        out.write_error(
            buf,
            "Config",
            "invalid pattern",
            Some("unclosed character class"),
            None,
        );
    });
    assert!(result.contains("✖ Config: invalid pattern\n"));
    assert!(result.contains("  × unclosed character class\n"));
}

#[test]
fn error_without_colors_full() {
    let out = make_output(false);
    let result = render(|buf| {
        out.write_error(
            buf,
            "Pattern",
            "invalid pattern",
            Some("unclosed character class"),
            Some("Check glob syntax"),
        );
    });
    assert_eq!(
        result,
        "✖ Pattern: invalid pattern\n  × unclosed character class\n  help: Check glob syntax\n"
    );
}

#[test]
fn scan_error_uses_type_and_suggestion() {
    let out = make_output(false);
    let err = ScanError::UnknownLanguage("klingon".to_string());
    let result = render(|buf| out.write_scan_error(buf, &err));
    assert!(result.starts_with("✖ Language: Unknown language: klingon\n"));
    assert!(result.contains("  help: Run `comment-scan languages`"));
}

#[test]
fn scan_error_includes_cause() {
    let out = make_output(false);
    let err = ScanError::FileRead {
        path: PathBuf::from("gone.rs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let result = render(|buf| out.write_scan_error(buf, &err));
    assert!(result.contains("✖ FileRead: Failed to read file: gone.rs\n"));
    assert!(result.contains("  × no such file\n"));
}

#[test]
fn warning_without_colors_basic() {
    let out = make_output(false);
    let result = render(|buf| out.write_warning(buf, "skipped notes.txt", None));
    assert_eq!(result, "⚠ Warning: skipped notes.txt\n");
}

#[test]
fn warning_without_colors_with_detail() {
    let out = make_output(false);
    let result = render(|buf| {
        out.write_warning(buf, "skipped notes.txt", Some("no language for extension"));
    });
    assert_eq!(
        result,
        "⚠ Warning: skipped notes.txt\n  × no language for extension\n"
    );
}

#[test]
fn error_with_colors_contains_ansi() {
    let out = make_output(true);
    let result = render(|buf| out.write_error(buf, "Config", "test error", None, Some("hint")));
    assert!(result.contains("\x1b["));
    assert!(result.contains("✖ Config:"));
    assert!(result.contains("test error"));
    assert!(result.contains("help:"));
}

#[test]
fn warning_with_colors_contains_ansi() {
    let out = make_output(true);
    let result = render(|buf| out.write_warning(buf, "test warning", Some("detail")));
    assert!(result.contains("\x1b["));
    assert!(result.contains("⚠ Warning:"));
    assert!(result.contains("× detail"));
}

#[test]
fn new_with_always_mode() {
    let out = ErrorOutput::new(ColorMode::Always);
    let result = render(|buf| out.write_error(buf, "Test", "msg", None, None));
    assert!(result.contains("\x1b["));
}

#[test]
fn new_with_never_mode() {
    let out = ErrorOutput::new(ColorMode::Never);
    let result = render(|buf| out.write_error(buf, "Test", "msg", None, None));
    assert_eq!(result, "✖ Test: msg\n");
}

// NO_COLOR detection is not tested here: mutating the environment is unsafe
// in edition 2024 while other tests run in parallel.

#[test]
fn info_without_colors() {
    let out = make_output(false);
    let result = render(|buf| out.write_info(buf, "Scanned 3 files"));
    assert_eq!(result, "ℹ Scanned 3 files\n");
}
