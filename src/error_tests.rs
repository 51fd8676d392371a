use std::path::PathBuf;

use super::*;

#[test]
fn error_display_unknown_language() {
    let err = ScanError::UnknownLanguage("not-a-real-language".to_string());
    assert_eq!(err.to_string(), "Unknown language: not-a-real-language");
}

#[test]
fn error_display_config() {
    let err = ScanError::Config("bad value".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad value");
}

#[test]
fn error_display_invalid_language_definition() {
    let err = ScanError::InvalidLanguageDefinition {
        language: "mylang".to_string(),
        reason: "empty line comment marker".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid definition for language 'mylang': empty line comment marker"
    );
}

#[test]
fn error_display_file_read() {
    let err = ScanError::FileRead {
        path: PathBuf::from("test.rs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("test.rs"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        ScanError::UnknownLanguage("x".to_string()).error_type(),
        "Language"
    );
    assert_eq!(ScanError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        ScanError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn unknown_language_has_suggestion() {
    let err = ScanError::UnknownLanguage("x".to_string());
    assert!(err.suggestion().unwrap().contains("languages"));
    assert!(ScanError::Config("x".to_string()).suggestion().is_none());
}

#[test]
fn io_error_converts() {
    let err: ScanError = std::io::Error::other("boom").into();
    assert!(matches!(err, ScanError::Io(_)));
}

#[test]
fn toml_error_converts() {
    let parse: std::result::Result<toml::Value, _> = toml::from_str("a = ");
    let err: ScanError = parse.unwrap_err().into();
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn file_read_detail_is_io_cause() {
    let err = ScanError::FileRead {
        path: PathBuf::from("missing.rs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert_eq!(err.detail().as_deref(), Some("file not found"));
}

#[test]
fn unknown_language_has_no_detail() {
    assert!(ScanError::UnknownLanguage("x".to_string()).detail().is_none());
}
