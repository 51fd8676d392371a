//! Language rule table: per-language comment and string syntax as data.

mod builtin;
mod registry;
mod rules;

pub use registry::{Language, LanguageRegistry, rules_for};
pub use rules::{BlockComment, Escape, LanguageRules, LineComment, PatternKind, StringDelimiter};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
