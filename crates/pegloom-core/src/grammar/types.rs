//! Grammar AST definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete grammar: named rules in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrammarDefinition {
    pub name: String,
    pub annotations: Vec<Annotation>,
    /// Rules in definition order. The first rule is the entry rule.
    pub rules: Vec<RuleDefinition>,
}

/// Grammar-level annotation (`@name value`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

/// A named rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    pub pattern: Expr,
    pub documentation: Option<String>,
}

/// Expression node.
///
/// Every variant owns its sub-expressions except `Identifier`, which names
/// another rule of the enclosing grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// Exact text.
    StringLiteral { value: String, quote: Quote },
    /// One character from (or, negated, outside) a set of ranges.
    CharacterClass { ranges: Vec<CharRange>, negated: bool },
    /// Any single character.
    AnyChar,
    /// Reference to another rule by name.
    Identifier { name: String },
    /// Elements matched in order.
    Sequence { elements: Vec<Expr> },
    /// Ordered alternatives; the first match wins.
    Choice { alternatives: Vec<Expr> },
    /// Parenthesized expression.
    Group { expression: Box<Expr> },
    /// Zero or more repetitions.
    Star { expression: Box<Expr> },
    /// One or more repetitions.
    Plus { expression: Box<Expr> },
    /// Zero or one occurrence.
    Optional { expression: Box<Expr> },
    /// Between `min` and `max` (unbounded if `None`) repetitions.
    Quantified {
        expression: Box<Expr>,
        min: u32,
        max: Option<u32>,
    },
    /// `&e`: succeeds if `e` matches, consumes nothing.
    PositiveLookahead { expression: Box<Expr> },
    /// `!e`: succeeds if `e` does not match, consumes nothing.
    NegativeLookahead { expression: Box<Expr> },
    /// `label:e`.
    LabeledExpression { label: String, expression: Box<Expr> },
}

/// Quote style a literal was written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    #[default]
    Double,
    Single,
}

/// Inclusive character range; `end == None` is a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharRange {
    pub start: char,
    pub end: Option<char>,
}

impl CharRange {
    pub fn single(c: char) -> Self {
        Self {
            start: c,
            end: None,
        }
    }

    pub fn span(start: char, end: char) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self.end {
            None => c == self.start,
            Some(end) => self.start <= c && c <= end,
        }
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escaped = |c: char| -> String { c.escape_default().collect() };
        match self.end {
            None => write!(f, "{}", escaped(self.start)),
            Some(end) => write!(f, "{}-{}", escaped(self.start), escaped(end)),
        }
    }
}
