//! Factory functions and read-only queries for AST nodes.
//!
//! Nodes are plain immutable values: constructors take field values and
//! return the record, nothing is validated or normalized.

use super::types::{Annotation, CharRange, Expr, GrammarDefinition, Quote, RuleDefinition};

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::literal_quoted(value, Quote::Double)
    }

    pub fn literal_quoted(value: impl Into<String>, quote: Quote) -> Self {
        Self::StringLiteral {
            value: value.into(),
            quote,
        }
    }

    pub fn char_class(ranges: impl IntoIterator<Item = CharRange>, negated: bool) -> Self {
        Self::CharacterClass {
            ranges: ranges.into_iter().collect(),
            negated,
        }
    }

    pub fn any_char() -> Self {
        Self::AnyChar
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    pub fn seq(elements: impl IntoIterator<Item = Expr>) -> Self {
        Self::Sequence {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn choice(alternatives: impl IntoIterator<Item = Expr>) -> Self {
        Self::Choice {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    pub fn group(expression: Expr) -> Self {
        Self::Group {
            expression: Box::new(expression),
        }
    }

    pub fn star(expression: Expr) -> Self {
        Self::Star {
            expression: Box::new(expression),
        }
    }

    pub fn plus(expression: Expr) -> Self {
        Self::Plus {
            expression: Box::new(expression),
        }
    }

    pub fn optional(expression: Expr) -> Self {
        Self::Optional {
            expression: Box::new(expression),
        }
    }

    pub fn quantified(expression: Expr, min: u32, max: Option<u32>) -> Self {
        Self::Quantified {
            expression: Box::new(expression),
            min,
            max,
        }
    }

    pub fn and_predicate(expression: Expr) -> Self {
        Self::PositiveLookahead {
            expression: Box::new(expression),
        }
    }

    pub fn not_predicate(expression: Expr) -> Self {
        Self::NegativeLookahead {
            expression: Box::new(expression),
        }
    }

    pub fn labeled(label: impl Into<String>, expression: Expr) -> Self {
        Self::LabeledExpression {
            label: label.into(),
            expression: Box::new(expression),
        }
    }

    /// Tag name of the node, as used in the JSON format.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::StringLiteral { .. } => "StringLiteral",
            Self::CharacterClass { .. } => "CharacterClass",
            Self::AnyChar => "AnyChar",
            Self::Identifier { .. } => "Identifier",
            Self::Sequence { .. } => "Sequence",
            Self::Choice { .. } => "Choice",
            Self::Group { .. } => "Group",
            Self::Star { .. } => "Star",
            Self::Plus { .. } => "Plus",
            Self::Optional { .. } => "Optional",
            Self::Quantified { .. } => "Quantified",
            Self::PositiveLookahead { .. } => "PositiveLookahead",
            Self::NegativeLookahead { .. } => "NegativeLookahead",
            Self::LabeledExpression { .. } => "LabeledExpression",
        }
    }

    /// Direct sub-expressions in source order.
    pub fn children(&self) -> &[Expr] {
        match self {
            Self::StringLiteral { .. }
            | Self::CharacterClass { .. }
            | Self::AnyChar
            | Self::Identifier { .. } => &[],
            Self::Sequence { elements } => elements,
            Self::Choice { alternatives } => alternatives,
            Self::Group { expression }
            | Self::Star { expression }
            | Self::Plus { expression }
            | Self::Optional { expression }
            | Self::Quantified { expression, .. }
            | Self::PositiveLookahead { expression }
            | Self::NegativeLookahead { expression }
            | Self::LabeledExpression { expression, .. } => std::slice::from_ref(&**expression),
        }
    }

    /// Rule names referenced anywhere in this expression, first occurrence order.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Self::Identifier { name } = self {
            if !out.contains(&name.as_str()) {
                out.push(name.as_str());
            }
            return;
        }
        for child in self.children() {
            child.collect_references(out);
        }
    }
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, pattern: Expr) -> Self {
        Self {
            name: name.into(),
            pattern,
            documentation: None,
        }
    }

    pub fn documented(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

impl GrammarDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.annotations.push(Annotation {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for `with_rule(RuleDefinition::new(name, pattern))`.
    pub fn rule_def(self, name: impl Into<String>, pattern: Expr) -> Self {
        self.with_rule(RuleDefinition::new(name, pattern))
    }

    /// First rule with the given name.
    pub fn rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Entry rule (the first one defined).
    pub fn entry(&self) -> Option<&RuleDefinition> {
        self.rules.first()
    }

    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }
}
