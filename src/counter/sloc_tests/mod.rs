use super::*;

mod nested_comment_tests;

pub(super) use crate::counter::test_fixtures::{
    lua_rules, python_rules, rust_rules, rust_rules_with_nesting,
};

pub(super) fn unwrap_stats(result: CountResult) -> LineStats {
    match result {
        CountResult::Stats(stats) => stats,
        CountResult::IgnoredFile => panic!("Expected Stats, got IgnoredFile"),
    }
}
