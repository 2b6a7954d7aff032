use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = r#"{
        "name": "test",
        "rules": {
            "start": { "pattern": { "type": "Identifier", "name": "word" } },
            "word": { "pattern": { "type": "StringLiteral", "value": "x" } }
        }
    }"#;

    let grammar = GrammarDefinition::from_json(json).unwrap();
    assert_eq!(grammar.name, "test");
    assert_eq!(grammar.rules.len(), 2);
    assert_eq!(grammar.rules[1].pattern, Expr::literal("x"));
}

#[test]
fn parse_sequence_and_choice() {
    let json = r#"{
        "name": "test",
        "rules": {
            "root": { "pattern": {
                "type": "Sequence",
                "elements": [
                    { "type": "StringLiteral", "value": "a", "quote": "single" },
                    { "type": "Choice", "alternatives": [
                        { "type": "AnyChar" },
                        { "type": "CharacterClass", "ranges": [{ "start": "a", "end": "z" }], "negated": true }
                    ]}
                ]
            }}
        }
    }"#;

    let grammar = GrammarDefinition::from_json(json).unwrap();
    let expected = Expr::seq([
        Expr::literal_quoted("a", Quote::Single),
        Expr::choice([
            Expr::any_char(),
            Expr::char_class([CharRange::span('a', 'z')], true),
        ]),
    ]);
    assert_eq!(grammar.rules[0].pattern, expected);
}

#[test]
fn parse_quantified_and_labeled() {
    let json = r#"{
        "type": "LabeledExpression",
        "label": "digits",
        "expression": {
            "type": "Quantified",
            "min": 2,
            "expression": { "type": "CharacterClass", "ranges": [{ "start": "0", "end": "9" }] }
        }
    }"#;

    let expr = Expr::from_json(json).unwrap();
    let inner = Expr::char_class([CharRange::span('0', '9')], false);
    assert_eq!(expr, Expr::labeled("digits", Expr::quantified(inner, 2, None)));
}

#[test]
fn preserves_rule_order() {
    let json = r#"{
        "name": "test",
        "rules": {
            "zebra": { "pattern": { "type": "StringLiteral", "value": "z" } },
            "alpha": { "pattern": { "type": "StringLiteral", "value": "a" } },
            "middle": { "pattern": { "type": "StringLiteral", "value": "m" } }
        }
    }"#;

    let grammar = GrammarDefinition::from_json(json).unwrap();
    let names: Vec<_> = grammar.rule_names().collect();
    assert_eq!(names, ["zebra", "alpha", "middle"]);
    assert_eq!(grammar.entry().unwrap().name, "zebra");
}

#[test]
fn annotations_and_documentation() {
    let json = r#"{
        "name": "test",
        "annotations": [{ "name": "version", "value": "2" }, { "name": "strict" }],
        "rules": {
            "start": { "pattern": { "type": "AnyChar" }, "documentation": "Any one character." }
        }
    }"#;

    let grammar = GrammarDefinition::from_json(json).unwrap();
    assert_eq!(grammar.annotation("version").unwrap().value.as_deref(), Some("2"));
    assert_eq!(grammar.annotation("strict").unwrap().value, None);
    assert_eq!(grammar.rules[0].documentation.as_deref(), Some("Any one character."));
}

#[test]
fn unknown_type_is_an_error() {
    let json = r#"{ "type": "Bogus" }"#;

    let err = Expr::from_json(json).unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn to_json_shape() {
    let grammar = GrammarDefinition::new("g").with_rule(
        RuleDefinition::new("start", Expr::optional(Expr::literal("a"))).documented("Entry."),
    );

    insta::assert_snapshot!(grammar.to_json(), @r#"
    {
      "name": "g",
      "rules": {
        "start": {
          "pattern": {
            "type": "Optional",
            "expression": {
              "type": "StringLiteral",
              "value": "a",
              "quote": "double"
            }
          },
          "documentation": "Entry."
        }
      }
    }
    "#);
}

#[test]
fn to_json_then_from_json() {
    let grammar = GrammarDefinition::new("calc")
        .with_annotation("version", Some("1".into()))
        .rule_def(
            "sum",
            Expr::seq([
                Expr::ident("num"),
                Expr::star(Expr::seq([Expr::literal("+"), Expr::ident("num")])),
            ]),
        )
        .rule_def("num", Expr::plus(Expr::char_class([CharRange::span('0', '9')], false)));

    let decoded = GrammarDefinition::from_json(&grammar.to_json()).unwrap();
    assert_eq!(decoded, grammar);
}

#[test]
fn accepts_indented_source() {
    let json = indoc! {r#"
        {
          "name": "t",
          "rules": {
            "a": { "pattern": { "type": "NegativeLookahead", "expression": { "type": "AnyChar" } } }
          }
        }
    "#};

    let grammar = GrammarDefinition::from_json(json).unwrap();
    assert_eq!(grammar.rules[0].pattern, Expr::not_predicate(Expr::any_char()));
}
