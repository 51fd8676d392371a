#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the comment-scan binary.
#[macro_export]
macro_rules! comment_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("comment-scan"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a project-local config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".comment-scan.toml", content);
    }

    /// Command running inside the fixture, isolated from the user's config dir.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = comment_scan!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Rust source where comment markers also appear inside literals.
pub const TRICKY_RUST: &str = r#"// Leading comment
fn main() {
    let url = "http://example.com"; // real comment
    let raw = r"/* not a comment */";
    /* outer /* nested */ still comment */
}
"#;

/// Python source with a comment marker inside a string.
pub const TRICKY_PYTHON: &str = "x = \"# not a comment\"  # real one\n";

/// Config defining a custom language.
pub const CUSTOM_LANGUAGE_CONFIG: &str = r##"
[languages.Toy]
extensions = ["toy"]
line_comments = [";;"]
block_comments = [["#|", "|#"]]
nested_comments = true
strings = [{ open = "\"" }]
"##;
