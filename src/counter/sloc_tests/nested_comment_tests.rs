use super::*;

#[test]
fn sloc_non_nesting_first_close_wins() {
    let rules = rust_rules();
    let counter = SlocCounter::new(&rules);
    // Without nesting the first `*/` closes, leaving code on the line.
    let stats = unwrap_stats(counter.count("/* outer /* inner */ rest_is_code */ final"));

    assert_eq!(stats.total, 1);
    assert_eq!(stats.code, 1);
    assert_eq!(stats.comment, 0);
}

#[test]
fn sloc_nesting_keeps_whole_line_comment() {
    let rules = rust_rules_with_nesting();
    let counter = SlocCounter::new(&rules);
    let stats = unwrap_stats(counter.count("/* outer /* inner */ still comment */"));

    assert_eq!(stats.total, 1);
    assert_eq!(stats.comment, 1);
    assert_eq!(stats.code, 0);
}

#[test]
fn sloc_nested_comment_multiline() {
    let rules = rust_rules_with_nesting();
    let counter = SlocCounter::new(&rules);
    let source = "/* start /* nested\ninner end */\nstill comment */\nlet x = 1;";
    let stats = unwrap_stats(counter.count(source));

    assert_eq!(stats.total, 4);
    assert_eq!(stats.comment, 3);
    assert_eq!(stats.code, 1);
}

#[test]
fn sloc_unterminated_comment_runs_to_end() {
    let rules = rust_rules_with_nesting();
    let counter = SlocCounter::new(&rules);
    let stats = unwrap_stats(counter.count("x\n/* open /* deeper */\nlet y = 2;"));

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 1);
    assert_eq!(stats.comment, 2);
}
