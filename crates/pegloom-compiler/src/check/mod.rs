//! Static checks over a grammar definition.
//!
//! Checks never fail: every finding is a [`GrammarIssue`]. Issues come out
//! pass by pass; the per-rule pass reports repetitions and empty choices in
//! source order.

mod left_recursion;
mod nullable;

#[cfg(test)]
mod mod_tests;

use std::fmt;

use indexmap::IndexSet;
use pegloom_core::grammar::{Expr, GrammarDefinition};

use crate::infer::{TypeInferenceOptions, infer_grammar_types};

pub use left_recursion::find_left_recursion;
pub use nullable::Nullability;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The grammar cannot be compiled or will fail at parse time.
    Error,
    /// The grammar works, but part of it is probably not what was meant.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A problem found in a grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarIssue {
    pub severity: Severity,
    /// Rule the issue was found in.
    pub rule: Option<String>,
    pub message: String,
}

impl GrammarIssue {
    fn error(rule: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            rule: Some(rule.to_string()),
            message,
        }
    }

    fn warning(rule: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            rule: rule.map(str::to_string),
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for GrammarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "{}[{rule}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Run every check over `grammar`.
pub fn check_grammar(grammar: &GrammarDefinition) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    let mut seen = IndexSet::new();
    let mut reported = IndexSet::new();
    for rule in &grammar.rules {
        if !seen.insert(rule.name.as_str()) && reported.insert(rule.name.as_str()) {
            issues.push(GrammarIssue::error(
                &rule.name,
                format!("rule `{}` is defined more than once", rule.name),
            ));
        }
    }

    for rule in &grammar.rules {
        for target in rule.pattern.references() {
            if grammar.rule(target).is_none() {
                issues.push(GrammarIssue::error(
                    &rule.name,
                    format!("reference to unknown rule `{target}`"),
                ));
            }
        }
    }

    for cycle in find_left_recursion(grammar) {
        issues.push(GrammarIssue::error(
            &cycle[0],
            format!("left recursion: {}", cycle.join(" -> ")),
        ));
    }

    let mut nullability = Nullability::new(grammar);
    for rule in &grammar.rules {
        let mut findings = Vec::new();
        scan(&rule.pattern, &mut nullability, &mut findings);
        for finding in findings {
            let issue = match finding {
                Finding::NullableRepetition(kind) => GrammarIssue::error(
                    &rule.name,
                    format!("{kind} body can match empty input and would loop forever"),
                ),
                Finding::EmptyChoice => GrammarIssue::warning(
                    Some(rule.name.as_str()),
                    "empty choice never matches".to_string(),
                ),
            };
            issues.push(issue);
        }
    }

    let types = infer_grammar_types(grammar, TypeInferenceOptions::default());
    for cycle in &types.circular_dependencies {
        issues.push(GrammarIssue::warning(
            None,
            format!(
                "circular dependency {} types as `unknown`",
                cycle.join(" -> ")
            ),
        ));
    }

    issues
}

enum Finding {
    NullableRepetition(&'static str),
    EmptyChoice,
}

fn scan<'g>(expr: &'g Expr, nullability: &mut Nullability<'g>, out: &mut Vec<Finding>) {
    match expr {
        Expr::Star { expression } | Expr::Plus { expression } => {
            if nullability.can_match_empty(expression) {
                out.push(Finding::NullableRepetition(expr.kind_name()));
            }
        }
        Expr::Quantified { expression, max, .. } if max.is_none_or(|m| m > 1) => {
            if nullability.can_match_empty(expression) {
                out.push(Finding::NullableRepetition(expr.kind_name()));
            }
        }
        Expr::Choice { alternatives } if alternatives.is_empty() => out.push(Finding::EmptyChoice),
        _ => {}
    }
    for child in expr.children() {
        scan(child, nullability, out);
    }
}
