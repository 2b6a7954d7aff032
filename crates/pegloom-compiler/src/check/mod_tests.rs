use indoc::indoc;
use pegloom_core::grammar::{Expr, GrammarDefinition};

use super::{GrammarIssue, Severity, check_grammar};

fn lit(s: &str) -> Expr {
    Expr::literal(s)
}

fn render(issues: &[GrammarIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{i}\n"))
        .collect::<String>()
}

#[test]
fn clean_grammar() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("list", Expr::star(Expr::ident("item")))
        .rule_def("item", Expr::plus(lit("x")));

    assert!(check_grammar(&grammar).is_empty());
}

#[test]
fn reports_every_kind() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("start", Expr::seq([Expr::ident("dup"), Expr::ident("nope")]))
        .rule_def("dup", lit("a"))
        .rule_def("dup", lit("b"))
        .rule_def("loop", Expr::star(Expr::optional(lit("x"))))
        .rule_def("empty", Expr::choice([]))
        .rule_def("left", Expr::seq([Expr::ident("left"), lit("x")]));

    let issues = check_grammar(&grammar);

    insta::assert_snapshot!(render(&issues), @r"
    error[dup]: rule `dup` is defined more than once
    error[start]: reference to unknown rule `nope`
    error[left]: left recursion: left -> left
    error[loop]: Star body can match empty input and would loop forever
    warning[empty]: empty choice never matches
    warning: circular dependency left -> left types as `unknown`
    ");
}

#[test]
fn bounded_quantifier_of_nullable_body_is_fine() {
    let grammar = GrammarDefinition::new("g")
        .rule_def("once", Expr::quantified(Expr::optional(lit("x")), 0, Some(1)))
        .rule_def("many", Expr::quantified(Expr::optional(lit("x")), 1, Some(4)));

    let issues = check_grammar(&grammar);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule.as_deref(), Some("many"));
    assert!(issues[0].is_error());
}

#[test]
fn consuming_recursion_is_only_a_warning() {
    let grammar = GrammarDefinition::new("g").rule_def(
        "nested",
        Expr::seq([lit("("), Expr::optional(Expr::ident("nested")), lit(")")]),
    );

    let issues = check_grammar(&grammar);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].rule, None);
    assert_eq!(
        render(&issues),
        indoc! {"
            warning: circular dependency nested -> nested types as `unknown`
        "}
    );
}
