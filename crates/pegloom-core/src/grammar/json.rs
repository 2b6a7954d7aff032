//! JSON encoding for grammar definitions.
//!
//! Expressions are internally tagged with a `type` field named after the node
//! kind. Rules are an object keyed by rule name, in definition order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{Annotation, CharRange, Expr, GrammarDefinition, Quote, RuleDefinition};

/// Error during grammar decoding.
#[derive(Debug)]
pub enum GrammarError {
    Json(serde_json::Error),
    Binary(postcard::Error),
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Binary(e) => write!(f, "binary decode error: {e}"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Binary(e) => Some(e),
        }
    }
}

impl GrammarDefinition {
    /// Parse a grammar from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json).map_err(GrammarError::Json)?;
        Ok(raw.into())
    }

    /// Encode as pretty-printed JSON.
    ///
    /// Rules sharing a name collapse into the last definition, since JSON
    /// objects cannot hold duplicate keys.
    pub fn to_json(&self) -> String {
        let raw = RawGrammar::from(self);
        serde_json::to_string_pretty(&raw).unwrap_or_default()
    }
}

impl Expr {
    /// Parse a single expression from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawExpr = serde_json::from_str(json).map_err(GrammarError::Json)?;
        Ok(raw.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawGrammar {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<RawAnnotation>,
    rules: IndexMap<String, RawRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawAnnotation {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawRule {
    pattern: RawExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawCharRange {
    start: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<char>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum RawExpr {
    StringLiteral {
        value: String,
        #[serde(default)]
        quote: Quote,
    },
    CharacterClass {
        ranges: Vec<RawCharRange>,
        #[serde(default)]
        negated: bool,
    },
    AnyChar,
    Identifier {
        name: String,
    },
    Sequence {
        elements: Vec<RawExpr>,
    },
    Choice {
        alternatives: Vec<RawExpr>,
    },
    Group {
        expression: Box<RawExpr>,
    },
    Star {
        expression: Box<RawExpr>,
    },
    Plus {
        expression: Box<RawExpr>,
    },
    Optional {
        expression: Box<RawExpr>,
    },
    Quantified {
        expression: Box<RawExpr>,
        min: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    PositiveLookahead {
        expression: Box<RawExpr>,
    },
    NegativeLookahead {
        expression: Box<RawExpr>,
    },
    LabeledExpression {
        label: String,
        expression: Box<RawExpr>,
    },
}

impl From<RawGrammar> for GrammarDefinition {
    fn from(raw: RawGrammar) -> Self {
        // IndexMap preserves insertion order, so the entry rule stays first.
        Self {
            name: raw.name,
            annotations: raw
                .annotations
                .into_iter()
                .map(|a| Annotation {
                    name: a.name,
                    value: a.value,
                })
                .collect(),
            rules: raw
                .rules
                .into_iter()
                .map(|(name, rule)| RuleDefinition {
                    name,
                    pattern: rule.pattern.into(),
                    documentation: rule.documentation,
                })
                .collect(),
        }
    }
}

impl From<&GrammarDefinition> for RawGrammar {
    fn from(grammar: &GrammarDefinition) -> Self {
        Self {
            name: grammar.name.clone(),
            annotations: grammar
                .annotations
                .iter()
                .map(|a| RawAnnotation {
                    name: a.name.clone(),
                    value: a.value.clone(),
                })
                .collect(),
            rules: grammar
                .rules
                .iter()
                .map(|r| {
                    let rule = RawRule {
                        pattern: (&r.pattern).into(),
                        documentation: r.documentation.clone(),
                    };
                    (r.name.clone(), rule)
                })
                .collect(),
        }
    }
}

impl From<RawExpr> for Expr {
    fn from(raw: RawExpr) -> Self {
        #[allow(clippy::boxed_local)] // Fields are Box<RawExpr>, output needs Box<Expr>
        fn conv(expression: Box<RawExpr>) -> Box<Expr> {
            Box::new(Expr::from(*expression))
        }

        fn conv_all(exprs: Vec<RawExpr>) -> Vec<Expr> {
            exprs.into_iter().map(Into::into).collect()
        }

        match raw {
            RawExpr::StringLiteral { value, quote } => Expr::StringLiteral { value, quote },
            RawExpr::CharacterClass { ranges, negated } => Expr::CharacterClass {
                ranges: ranges
                    .into_iter()
                    .map(|r| CharRange {
                        start: r.start,
                        end: r.end,
                    })
                    .collect(),
                negated,
            },
            RawExpr::AnyChar => Expr::AnyChar,
            RawExpr::Identifier { name } => Expr::Identifier { name },
            RawExpr::Sequence { elements } => Expr::Sequence {
                elements: conv_all(elements),
            },
            RawExpr::Choice { alternatives } => Expr::Choice {
                alternatives: conv_all(alternatives),
            },
            RawExpr::Group { expression } => Expr::Group {
                expression: conv(expression),
            },
            RawExpr::Star { expression } => Expr::Star {
                expression: conv(expression),
            },
            RawExpr::Plus { expression } => Expr::Plus {
                expression: conv(expression),
            },
            RawExpr::Optional { expression } => Expr::Optional {
                expression: conv(expression),
            },
            RawExpr::Quantified {
                expression,
                min,
                max,
            } => Expr::Quantified {
                expression: conv(expression),
                min,
                max,
            },
            RawExpr::PositiveLookahead { expression } => Expr::PositiveLookahead {
                expression: conv(expression),
            },
            RawExpr::NegativeLookahead { expression } => Expr::NegativeLookahead {
                expression: conv(expression),
            },
            RawExpr::LabeledExpression { label, expression } => Expr::LabeledExpression {
                label,
                expression: conv(expression),
            },
        }
    }
}

impl From<&Expr> for RawExpr {
    fn from(expr: &Expr) -> Self {
        fn conv(expression: &Expr) -> Box<RawExpr> {
            Box::new(RawExpr::from(expression))
        }

        fn conv_all(exprs: &[Expr]) -> Vec<RawExpr> {
            exprs.iter().map(Into::into).collect()
        }

        match expr {
            Expr::StringLiteral { value, quote } => RawExpr::StringLiteral {
                value: value.clone(),
                quote: *quote,
            },
            Expr::CharacterClass { ranges, negated } => RawExpr::CharacterClass {
                ranges: ranges
                    .iter()
                    .map(|r| RawCharRange {
                        start: r.start,
                        end: r.end,
                    })
                    .collect(),
                negated: *negated,
            },
            Expr::AnyChar => RawExpr::AnyChar,
            Expr::Identifier { name } => RawExpr::Identifier { name: name.clone() },
            Expr::Sequence { elements } => RawExpr::Sequence {
                elements: conv_all(elements),
            },
            Expr::Choice { alternatives } => RawExpr::Choice {
                alternatives: conv_all(alternatives),
            },
            Expr::Group { expression } => RawExpr::Group {
                expression: conv(expression),
            },
            Expr::Star { expression } => RawExpr::Star {
                expression: conv(expression),
            },
            Expr::Plus { expression } => RawExpr::Plus {
                expression: conv(expression),
            },
            Expr::Optional { expression } => RawExpr::Optional {
                expression: conv(expression),
            },
            Expr::Quantified {
                expression,
                min,
                max,
            } => RawExpr::Quantified {
                expression: conv(expression),
                min: *min,
                max: *max,
            },
            Expr::PositiveLookahead { expression } => RawExpr::PositiveLookahead {
                expression: conv(expression),
            },
            Expr::NegativeLookahead { expression } => RawExpr::NegativeLookahead {
                expression: conv(expression),
            },
            Expr::LabeledExpression { label, expression } => RawExpr::LabeledExpression {
                label: label.clone(),
                expression: conv(expression),
            },
        }
    }
}
