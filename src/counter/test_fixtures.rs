//! Shared `LanguageRules` fixtures for the counter tests.

use crate::language::{BlockComment, LanguageRules, StringDelimiter};

/// Rust-like rules without nesting.
pub fn rust_rules() -> LanguageRules {
    LanguageRules::new(&["//", "///", "//!"], &[("/*", "*/")])
        .with_strings(vec![StringDelimiter::quoted("\"").multiline()])
}

/// Rust rules with nested block comments and raw strings.
pub fn rust_rules_with_nesting() -> LanguageRules {
    LanguageRules::new(&["//", "///", "//!"], &[])
        .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
        .with_strings(vec![
            StringDelimiter::rust_raw(),
            StringDelimiter::quoted("\"").multiline(),
        ])
}

/// Python: `#` comments, triple-quoted strings are literals.
pub fn python_rules() -> LanguageRules {
    LanguageRules::new(&["#"], &[]).with_strings(vec![
        StringDelimiter::quoted("\"\"\"").multiline(),
        StringDelimiter::quoted("'''").multiline(),
        StringDelimiter::quoted("\""),
        StringDelimiter::quoted("'"),
    ])
}

pub fn lua_rules() -> LanguageRules {
    LanguageRules::new(&["--"], &[])
        .with_block_comments(vec![BlockComment::lua_long_bracket()])
        .with_strings(vec![
            StringDelimiter::lua_long_bracket(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ])
}
