use super::*;

fn digit() -> Expr {
    Expr::char_class([CharRange::span('0', '9')], false)
}

#[test]
fn factories_build_expected_nodes() {
    assert_eq!(
        Expr::literal("if"),
        Expr::StringLiteral {
            value: "if".into(),
            quote: Quote::Double,
        }
    );
    assert_eq!(
        Expr::quantified(digit(), 1, Some(3)),
        Expr::Quantified {
            expression: Box::new(digit()),
            min: 1,
            max: Some(3),
        }
    );
    assert_eq!(Expr::seq([]), Expr::Sequence { elements: vec![] });
}

#[test]
fn kind_names_match_json_tags() {
    assert_eq!(Expr::any_char().kind_name(), "AnyChar");
    assert_eq!(Expr::and_predicate(digit()).kind_name(), "PositiveLookahead");
    assert_eq!(Expr::labeled("x", digit()).kind_name(), "LabeledExpression");
}

#[test]
fn children_of_leaf_and_wrapper() {
    assert!(Expr::ident("a").children().is_empty());
    assert_eq!(Expr::star(digit()).children(), &[digit()]);
    assert_eq!(
        Expr::choice([Expr::literal("a"), Expr::literal("b")]).children().len(),
        2
    );
}

#[test]
fn references_in_first_occurrence_order() {
    let expr = Expr::seq([
        Expr::ident("b"),
        Expr::optional(Expr::ident("a")),
        Expr::group(Expr::choice([Expr::ident("b"), Expr::ident("c")])),
    ]);

    assert_eq!(expr.references(), ["b", "a", "c"]);
    assert!(digit().references().is_empty());
}

#[test]
fn grammar_lookup() {
    let grammar = GrammarDefinition::new("g")
        .with_annotation("version", Some("3".into()))
        .rule_def("start", Expr::ident("num"))
        .with_rule(RuleDefinition::new("num", Expr::plus(digit())).documented("Digits."))
        .rule_def("num", Expr::literal("shadowed"));

    assert_eq!(grammar.entry().unwrap().name, "start");
    assert_eq!(
        grammar.rule("num").unwrap().documentation.as_deref(),
        Some("Digits.")
    );
    assert_eq!(grammar.rule_names().count(), 3);
    assert!(grammar.rule("missing").is_none());
    assert_eq!(grammar.annotation("version").unwrap().value.as_deref(), Some("3"));
}

#[test]
fn char_range_contains_and_display() {
    let single = CharRange::single('x');
    let span = CharRange::span('a', 'f');

    assert!(single.contains('x'));
    assert!(!single.contains('y'));
    assert!(span.contains('a') && span.contains('f') && span.contains('c'));
    assert!(!span.contains('g'));
    assert_eq!(single.to_string(), "x");
    assert_eq!(span.to_string(), "a-f");
    assert_eq!(CharRange::single('\n').to_string(), "\\n");
}
