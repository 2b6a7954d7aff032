use std::cell::RefCell;
use std::rc::Rc;

use pegloom_core::grammar::{CharRange, Expr, GrammarDefinition};
use pegloom_core::{Colors, ParseResultExt, Pos};
use pegloom_runtime::combinators::sequence;
use pegloom_runtime::{Parser, ParserExt, PrintTracer};

use super::*;
use crate::Error;

fn digit() -> Expr {
    Expr::char_class([CharRange::span('0', '9')], false)
}

fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

/// list = item ("," item)*
/// item = [0-9]+ / "(" list ")"
fn lists() -> GrammarDefinition {
    GrammarDefinition::new("lists")
        .rule_def(
            "list",
            Expr::seq([
                Expr::ident("item"),
                Expr::star(Expr::seq([Expr::literal(","), Expr::ident("item")])),
            ]),
        )
        .rule_def(
            "item",
            Expr::choice([
                Expr::plus(digit()),
                Expr::seq([Expr::literal("("), Expr::ident("list"), Expr::literal(")")]),
            ]),
        )
}

#[test]
fn sequence_of_literals() {
    let grammar = GrammarDefinition::new("g").rule_def(
        "abc",
        Expr::seq([Expr::literal("a"), Expr::literal("b"), Expr::literal("c")]),
    );
    let compiled = compile(&grammar).unwrap();

    let success = compiled.parse("abc", "abc").unwrap().unwrap();
    assert_eq!(success.val, Value::Array(vec![s("a"), s("b"), s("c")]));
    assert_eq!(success.next, Pos::new(3, 3, 1));

    let error = compiled.parse("abc", "abd").unwrap().unwrap_err();
    assert_eq!(error.pos, Pos::new(2, 2, 1));
    assert_eq!(error.parser_name.as_deref(), Some("abc"));
}

#[test]
fn recursive_rules() {
    let compiled = compile(&lists()).unwrap();

    let value = compiled.parse_entry("1,(2,3)").unwrap().unwrap_value();
    insta::assert_snapshot!(value.format(false, Colors::OFF), @r#"[["1"],[[",",["(",[["2"],[[",",["3"]]]],")"]]]]"#);
    assert_eq!(value.flatten_text(), "1,(2,3)");
}

#[test]
fn optional_and_quantified_values() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("opt", Expr::optional(Expr::literal("a")))
        .rule_def("maybe", Expr::quantified(Expr::literal("a"), 0, Some(1)))
        .rule_def("one", Expr::quantified(Expr::literal("a"), 1, Some(1)))
        .rule_def("two_three", Expr::quantified(digit(), 2, Some(3)));
    let compiled = compile(&grammar).unwrap();

    assert_eq!(compiled.parse("opt", "b").unwrap().unwrap_value(), Value::Null);
    assert_eq!(compiled.parse("maybe", "a").unwrap().unwrap_value(), s("a"));
    assert_eq!(compiled.parse("one", "a").unwrap().unwrap_value(), s("a"));
    assert_eq!(
        compiled.parse("two_three", "12345").unwrap().unwrap_value(),
        Value::Array(vec![s("1"), s("2"), s("3")])
    );

    let error = compiled.parse("two_three", "1").unwrap().unwrap_err();
    assert_eq!(error.message, "Expected at least 2 repetitions, found 1");
}

#[test]
fn lookahead_yields_null() {
    let grammar = GrammarDefinition::new("g").rule_def(
        "keyword",
        Expr::seq([
            Expr::literal("if"),
            Expr::not_predicate(Expr::char_class([CharRange::span('a', 'z')], false)),
        ]),
    );
    let compiled = compile(&grammar).unwrap();

    let value = compiled.parse("keyword", "if(").unwrap().unwrap_value();
    assert_eq!(value, Value::Array(vec![s("if"), Value::Null]));
    assert!(compiled.parse("keyword", "iffy").unwrap().is_err());
}

#[test]
fn group_and_label_are_transparent() {
    let grammar = GrammarDefinition::new("g").rule_def(
        "x",
        Expr::labeled("value", Expr::group(Expr::any_char())),
    );
    let compiled = compile(&grammar).unwrap();

    assert_eq!(compiled.parse("x", "é").unwrap().unwrap_value(), s("é"));
}

#[test]
fn duplicate_rule_is_an_error() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("a", Expr::literal("x"))
        .rule_def("a", Expr::literal("y"));

    let err = compile(&grammar).err().unwrap();
    assert_eq!(err, Error::DuplicateRule("a".into()));
    assert_eq!(err.to_string(), "rule `a` is defined more than once");
}

#[test]
fn unknown_references_are_undefined_entries() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("start", Expr::seq([Expr::literal("a"), Expr::ident("missing")]))
        .rule_def("other", Expr::choice([Expr::ident("nope"), Expr::ident("missing")]));
    let compiled = compile(&grammar).unwrap();

    assert_eq!(compiled.undefined_references(), ["missing", "nope"]);

    let error = compiled.parse("start", "a").unwrap().unwrap_err();
    assert_eq!(error.message, "Parser at index 1 is undefined");
    assert_eq!(error.pos, Pos::START);
}

#[test]
fn unknown_entry_rule() {
    let compiled = compile(&lists()).unwrap();

    let err = compiled.parse("nothing", "1").err().unwrap();
    assert_eq!(err, Error::UnknownRule("nothing".into()));
}

#[test]
fn empty_grammar_has_no_entry() {
    let compiled = compile(&GrammarDefinition::new("empty")).unwrap();

    assert_eq!(compiled.entry_rule(), None);
    assert_eq!(
        compiled.parse_entry("x").err(),
        Some(Error::EmptyGrammar("empty".into()))
    );
}

#[test]
fn parse_complete_requires_all_input() {
    let compiled = compile(&lists()).unwrap();

    assert!(compiled.parse("list", "1,2)").unwrap().is_ok());

    let error = compiled.parse_complete("list", "1,2)").unwrap().unwrap_err();
    assert_eq!(error.message, "Expected end of input");
    assert_eq!(error.pos, Pos::new(3, 3, 1));
}

#[test]
fn rule_parser_composes_with_combinators() {
    let compiled = compile(&lists()).unwrap();
    let item = compiled.parser("item").unwrap();
    let two = sequence(vec![item.clone().boxed(), item.boxed()]);

    let success = two.parse("(1)2", Pos::START).unwrap();
    assert_eq!(success.next.offset, 4);
    assert!(compiled.parser("ghost").is_none());
}

#[test]
fn rule_ref_outliving_grammar() {
    let item = compile(&lists()).unwrap().parser("item").unwrap();

    assert!(item.is_defined());
    let error = item.parse("1", Pos::START).unwrap_err();
    assert_eq!(error.message, "Grammar is no longer available");
}

#[test]
fn traced_parse_logs_rules() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("pair", Expr::seq([Expr::ident("digit"), Expr::ident("digit")]))
        .rule_def("digit", digit());
    let compiled = compile(&grammar).unwrap();
    let tracer = Rc::new(RefCell::new(PrintTracer::new(Colors::OFF)));

    let result = compiled.parse_traced("pair", "1x", false, tracer.clone()).unwrap();

    assert!(result.is_err());
    insta::assert_snapshot!(tracer.borrow().to_string(), @r#"
    > pair 1:0
      > digit 1:0
      + digit "1" 1:0..1:1
      > digit 1:1
      - digit Expected [0-9] but found "x" 1:1
    - pair Sequence failed at index 1: Expected [0-9] but found "x" 1:1
    "#);

    // The tracer is detached afterwards.
    compiled.parse("pair", "12").unwrap().unwrap();
    assert_eq!(tracer.borrow().lines().len(), 6);
}
