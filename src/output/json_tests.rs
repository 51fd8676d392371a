use std::path::{Path, PathBuf};

use super::*;
use crate::extract::extract_comments;
use crate::language::LanguageRegistry;
use crate::output::{FileComments, FileLineStats};

fn parse(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn comments_json_structure() {
    let source = "x = \"http://example.com\"  # real comment\n";
    let files = vec![FileComments {
        path: Path::new("app.py"),
        language: "Python",
        comments: extract_comments(source, "python").unwrap(),
    }];

    let json = parse(&JsonFormatter::new().format_comments(&files).unwrap());

    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["comments"], 1);
    let comment = &json["files"][0]["comments"][0];
    assert_eq!(json["files"][0]["path"], "app.py");
    assert_eq!(json["files"][0]["language"], "Python");
    assert_eq!(comment["kind"], "line");
    assert_eq!(comment["line"], 1);
    assert_eq!(comment["column"], 27);
    assert_eq!(comment["start"], 26);
    assert_eq!(comment["end"], 40);
    assert_eq!(comment["text"], " real comment");
}

#[test]
fn comments_json_with_delimiters() {
    let files = vec![FileComments {
        path: Path::new("a.c"),
        language: "C",
        comments: extract_comments("/* hi */", "c").unwrap(),
    }];

    let json = parse(
        &JsonFormatter::new()
            .with_delimiters(true)
            .format_comments(&files)
            .unwrap(),
    );

    assert_eq!(json["files"][0]["comments"][0]["kind"], "block");
    assert_eq!(json["files"][0]["comments"][0]["text"], "/* hi */");
}

#[test]
fn counts_json_flattens_stats() {
    let report = CountReport::new(
        vec![FileLineStats {
            path: PathBuf::from("src/lib.rs"),
            language: "Rust".to_string(),
            stats: LineStats {
                total: 15,
                code: 10,
                comment: 3,
                blank: 2,
            },
        }],
        vec![PathBuf::from("gen.rs")],
    );

    let json = parse(&JsonFormatter::new().format_counts(&report).unwrap());

    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["ignored"], 1);
    assert_eq!(json["summary"]["total"], 15);
    assert_eq!(json["summary"]["code"], 10);
    assert_eq!(json["files"][0]["path"], "src/lib.rs");
    assert_eq!(json["files"][0]["comment"], 3);
    assert_eq!(json["files"][0]["blank"], 2);
    assert_eq!(json["ignored"][0], "gen.rs");
}

#[test]
fn languages_json_lists_syntax() {
    let registry = LanguageRegistry::builtin();
    let languages = vec![
        registry.get("rust").unwrap().clone(),
        registry.get("lua").unwrap().clone(),
    ];

    let json = parse(&JsonFormatter::new().format_languages(&languages).unwrap());

    assert_eq!(json[0]["name"], "Rust");
    assert_eq!(json[0]["extensions"][0], "rs");
    assert_eq!(json[0]["block_comments"][0]["start"], "/*");
    assert_eq!(json[0]["block_comments"][0]["nested"], true);
    assert!(json[0]["block_comments"][0].get("leveled").is_none());
    assert_eq!(json[1]["block_comments"][0]["leveled"], true);
}
