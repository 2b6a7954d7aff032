use pegloom_core::grammar::CharRange;

use crate::primitives::{any_char, char_class, describe_class, end_of_input, literal};
use crate::{ParseResultExt, Parser, Pos};

#[test]
fn literal_advances_by_code_units() {
    let result = literal("héllo").parse("héllo world", Pos::START);

    let success = result.unwrap();
    assert_eq!(success.val, "héllo");
    assert_eq!(success.next, Pos::new(6, 5, 1));
}

#[test]
fn literal_failure_reports_prefix() {
    let error = literal("abc").parse("abd", Pos::START).unwrap_err();

    assert_eq!(error.message, "Expected \"abc\"");
    assert_eq!(error.pos, Pos::START);
    assert_eq!(error.expected, ["abc"]);
    assert_eq!(error.found.as_deref(), Some("abd"));
}

#[test]
fn literal_at_end_of_input() {
    let pos = Pos::START.advance("ab");
    let error = literal("c").parse("ab", pos).unwrap_err();

    assert_eq!(error.pos, pos);
    assert!(error.is_end_of_input());
}

#[test]
fn literal_short_remainder() {
    let error = literal("abc").parse("xy", Pos::START).unwrap_err();
    assert_eq!(error.found.as_deref(), Some("xy"));
}

#[test]
fn empty_literal_consumes_nothing() {
    let success = literal("").parse("abc", Pos::START).unwrap();
    assert!(!success.is_consuming());
}

#[test]
fn literal_across_lines() {
    let success = literal("a\nbc").parse("a\nbc", Pos::START).unwrap();
    assert_eq!(success.next, Pos::new(4, 2, 2));
}

#[test]
fn char_class_ranges() {
    let digit_or_underscore = char_class([CharRange::span('0', '9'), CharRange::single('_')], false);

    assert_eq!(digit_or_underscore.parse("7", Pos::START).unwrap_value(), '7');
    assert_eq!(digit_or_underscore.parse("_", Pos::START).unwrap_value(), '_');

    let error = digit_or_underscore.parse("x", Pos::START).unwrap_err();
    assert_eq!(error.message, "Expected [0-9_] but found \"x\"");
    assert_eq!(error.expected, ["[0-9_]"]);
    assert_eq!(error.found.as_deref(), Some("x"));
}

#[test]
fn negated_char_class() {
    let not_quote = char_class([CharRange::single('"')], true);

    assert_eq!(not_quote.parse("a", Pos::START).unwrap_value(), 'a');
    assert!(not_quote.parse("\"", Pos::START).is_err());
}

#[test]
fn char_class_multibyte() {
    let emoji = char_class([CharRange::span('😀', '😏')], false);

    let success = emoji.parse("😃!", Pos::START).unwrap();
    assert_eq!(success.next, Pos::new(4, 1, 1));
}

#[test]
fn char_class_at_end_of_input() {
    let error = char_class([CharRange::span('a', 'z')], false)
        .parse("", Pos::START)
        .unwrap_err();

    assert_eq!(error.message, "Unexpected end of input");
    assert!(error.is_end_of_input());
}

#[test]
fn any_char_matches_one_character() {
    let success = any_char().parse("\nx", Pos::START).unwrap();

    assert_eq!(success.val, '\n');
    assert_eq!(success.next, Pos::new(1, 0, 2));
}

#[test]
fn any_char_at_end_of_input() {
    let error = any_char().parse("a", Pos::new(1, 1, 1)).unwrap_err();

    assert!(error.message.contains("end of input"));
    assert_eq!(error.expected, ["any character"]);
}

#[test]
fn end_of_input_only_at_end() {
    assert!(end_of_input().parse("ab", Pos::new(2, 2, 1)).is_ok());

    let error = end_of_input().parse("abc", Pos::new(2, 2, 1)).unwrap_err();
    assert_eq!(error.message, "Expected end of input");
    assert_eq!(error.found.as_deref(), Some("c"));
}

#[test]
fn class_description() {
    let ranges = [CharRange::span('a', 'z'), CharRange::single('\t')];
    assert_eq!(describe_class(&ranges, false), "[a-z\\t]");
    assert_eq!(describe_class(&ranges, true), "[^a-z\\t]");
}
