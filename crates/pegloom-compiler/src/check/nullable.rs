//! Which expressions can succeed without consuming input.

use indexmap::{IndexMap, IndexSet};
use pegloom_core::grammar::{Expr, GrammarDefinition};

/// Nullability over a grammar's rules, memoized per rule.
///
/// A rule reached again while it is being resolved is assumed not to match
/// empty input; recursion through a rule can only add matches that consume.
/// Answers resting on that assumption are only memoized once the outermost
/// rule is resolved.
pub struct Nullability<'g> {
    rules: IndexMap<&'g str, &'g Expr>,
    memo: IndexMap<&'g str, bool>,
    visiting: IndexSet<&'g str>,
    /// Set when the current resolution reached a rule still on `visiting`.
    assumed: bool,
}

impl<'g> Nullability<'g> {
    pub fn new(grammar: &'g GrammarDefinition) -> Self {
        let mut rules = IndexMap::new();
        for rule in &grammar.rules {
            rules.entry(rule.name.as_str()).or_insert(&rule.pattern);
        }
        Self {
            rules,
            memo: IndexMap::new(),
            visiting: IndexSet::new(),
            assumed: false,
        }
    }

    /// Whether `expr` can succeed without consuming input.
    pub fn can_match_empty(&mut self, expr: &'g Expr) -> bool {
        match expr {
            Expr::StringLiteral { value, .. } => value.is_empty(),
            Expr::CharacterClass { .. } | Expr::AnyChar => false,
            Expr::Identifier { name } => self.rule(name),
            Expr::Sequence { elements } => elements.iter().all(|e| self.can_match_empty(e)),
            Expr::Choice { alternatives } => alternatives.iter().any(|a| self.can_match_empty(a)),
            Expr::Star { .. }
            | Expr::Optional { .. }
            | Expr::PositiveLookahead { .. }
            | Expr::NegativeLookahead { .. } => true,
            Expr::Quantified { min: 0, .. } => true,
            Expr::Group { expression }
            | Expr::Plus { expression }
            | Expr::Quantified { expression, .. }
            | Expr::LabeledExpression { expression, .. } => self.can_match_empty(expression),
        }
    }

    /// Nullability of a rule by name. Unknown rules never match.
    pub fn rule(&mut self, name: &str) -> bool {
        let Some((&name, &pattern)) = self.rules.get_key_value(name) else {
            return false;
        };
        if let Some(&known) = self.memo.get(name) {
            return known;
        }
        if !self.visiting.insert(name) {
            self.assumed = true;
            return false;
        }

        let outer = std::mem::replace(&mut self.assumed, false);
        let nullable = self.can_match_empty(pattern);
        self.visiting.swap_remove(name);

        let assumed = self.assumed;
        if self.visiting.is_empty() {
            self.assumed = false;
        } else {
            self.assumed = outer || assumed;
        }
        if !assumed || self.visiting.is_empty() {
            self.memo.insert(name, nullable);
        }
        nullable
    }
}
