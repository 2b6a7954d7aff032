//! Grammar to combinator compilation.
//!
//! Rules live in one shared table. Identifiers compile to [`RuleRef`]s that
//! hold a weak handle to the table plus the target's index, so recursive
//! grammars form no reference cycles and the whole table is freed with the
//! [`CompiledGrammar`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use pegloom_core::grammar::{Expr, GrammarDefinition};
use pegloom_core::{ParseError, ParseResult, Pos};
use pegloom_runtime::combinators::{choice, maybe, sequence};
use pegloom_runtime::lookahead::{and_predicate, not_predicate};
use pegloom_runtime::primitives::{any_char, char_class, end_of_input, literal};
use pegloom_runtime::repetition::{plus, repeat, star};
use pegloom_runtime::trace::traced;
use pegloom_runtime::transform::named;
use pegloom_runtime::{BoxedParser, Parser, ParserExt, Tracer};

use super::value::Value;
use crate::shape::Quantifier;
use crate::{Error, Result};

/// Tracer shared between a caller and the parsers it observes.
pub type SharedTracer = Rc<RefCell<dyn Tracer>>;

/// A grammar compiled into combinator parsers.
pub struct CompiledGrammar {
    name: String,
    table: Rc<RuleTable>,
    undefined: Vec<String>,
}

struct RuleTable {
    /// Rule parsers in definition order; `RuleRef::index` points here.
    rules: IndexMap<String, BoxedParser<Value>>,
    /// Set for the duration of a traced parse.
    tracer: RefCell<Option<SharedTracer>>,
}

impl RuleTable {
    fn invoke(&self, index: usize, input: &str, pos: Pos) -> ParseResult<Value> {
        let Some((name, parser)) = self.rules.get_index(index) else {
            return Err(ParseError::new(format!("No rule at index {index}"), pos));
        };
        let tracer = self.tracer.borrow().clone();
        match tracer {
            Some(tracer) => traced(name.as_str(), parser, tracer).parse(input, pos),
            None => parser.parse(input, pos),
        }
    }
}

/// Reference to a rule of a compiled grammar.
///
/// A reference to a name the grammar does not define has no index: it is
/// not defined, and sequences or choices containing it fail up front.
#[derive(Clone)]
pub struct RuleRef {
    table: Weak<RuleTable>,
    index: Option<usize>,
    name: String,
}

impl RuleRef {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Parser for RuleRef {
    type Output = Value;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<Value> {
        let Some(index) = self.index else {
            let message = format!("Reference to unknown rule `{}`", self.name);
            return Err(ParseError::new(message, pos));
        };
        match self.table.upgrade() {
            Some(table) => table.invoke(index, input, pos),
            None => Err(ParseError::new("Grammar is no longer available", pos)),
        }
    }

    fn is_defined(&self) -> bool {
        self.index.is_some()
    }
}

/// Compile every rule of `grammar`.
///
/// Unknown rule names are not an error here: they compile to undefined
/// references, listed by [`CompiledGrammar::undefined_references`].
pub fn compile(grammar: &GrammarDefinition) -> Result<CompiledGrammar> {
    let mut names: IndexSet<String> = IndexSet::with_capacity(grammar.rules.len());
    for rule in &grammar.rules {
        if !names.insert(rule.name.clone()) {
            return Err(Error::DuplicateRule(rule.name.clone()));
        }
    }

    let mut undefined = IndexSet::new();
    let table = Rc::new_cyclic(|weak| {
        let mut compiler = ExprCompiler {
            table: weak,
            names: &names,
            undefined: &mut undefined,
        };
        let rules = grammar
            .rules
            .iter()
            .map(|rule| {
                let body = compiler.expr(&rule.pattern);
                (rule.name.clone(), named(rule.name.clone(), body).boxed())
            })
            .collect();
        RuleTable {
            rules,
            tracer: RefCell::new(None),
        }
    });

    Ok(CompiledGrammar {
        name: grammar.name.clone(),
        table,
        undefined: undefined.into_iter().collect(),
    })
}

struct ExprCompiler<'a> {
    table: &'a Weak<RuleTable>,
    names: &'a IndexSet<String>,
    undefined: &'a mut IndexSet<String>,
}

impl ExprCompiler<'_> {
    fn expr(&mut self, expr: &Expr) -> BoxedParser<Value> {
        match expr {
            Expr::StringLiteral { value, .. } => literal(value.clone()).map(Value::String).boxed(),
            Expr::CharacterClass { ranges, negated } => char_class(ranges.clone(), *negated)
                .map(char_value)
                .boxed(),
            Expr::AnyChar => any_char().map(char_value).boxed(),
            Expr::Identifier { name } => self.reference(name).boxed(),
            Expr::Sequence { elements } => sequence(self.all(elements)).map(Value::Array).boxed(),
            Expr::Choice { alternatives } => choice(self.all(alternatives)).boxed(),
            Expr::Group { expression } | Expr::LabeledExpression { expression, .. } => {
                self.expr(expression)
            }
            Expr::Star { expression } => star(self.expr(expression)).map(Value::Array).boxed(),
            Expr::Plus { expression } => plus(self.expr(expression)).map(Value::Array).boxed(),
            Expr::Optional { expression } => self.optional(expression),
            Expr::Quantified {
                expression,
                min,
                max,
            } => match Quantifier::of(*min, *max) {
                Quantifier::Optional => self.optional(expression),
                Quantifier::Single => self.expr(expression),
                Quantifier::Array => {
                    let max = max.map(|m| m as usize);
                    repeat(self.expr(expression), *min as usize, max)
                        .map(Value::Array)
                        .boxed()
                }
            },
            Expr::PositiveLookahead { expression } => and_predicate(self.expr(expression))
                .map(|()| Value::Null)
                .boxed(),
            Expr::NegativeLookahead { expression } => not_predicate(self.expr(expression))
                .map(|()| Value::Null)
                .boxed(),
        }
    }

    fn all(&mut self, exprs: &[Expr]) -> Vec<BoxedParser<Value>> {
        exprs.iter().map(|e| self.expr(e)).collect()
    }

    fn optional(&mut self, expression: &Expr) -> BoxedParser<Value> {
        maybe(self.expr(expression))
            .map(|v| v.unwrap_or(Value::Null))
            .boxed()
    }

    fn reference(&mut self, name: &str) -> RuleRef {
        let index = self.names.get_index_of(name);
        if index.is_none() {
            self.undefined.insert(name.to_string());
        }
        RuleRef {
            table: Weak::clone(self.table),
            index,
            name: name.to_string(),
        }
    }
}

fn char_value(c: char) -> Value {
    Value::String(c.to_string())
}

impl CompiledGrammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.table.rules.keys().map(String::as_str)
    }

    /// First rule, used by [`parse_entry`](Self::parse_entry).
    pub fn entry_rule(&self) -> Option<&str> {
        self.table.rules.get_index(0).map(|(name, _)| name.as_str())
    }

    /// Names referenced but not defined, in first-seen order.
    pub fn undefined_references(&self) -> &[String] {
        &self.undefined
    }

    /// A parser for `rule`, usable with any combinator.
    pub fn parser(&self, rule: &str) -> Option<RuleRef> {
        let index = self.table.rules.get_index_of(rule)?;
        Some(RuleRef {
            table: Rc::downgrade(&self.table),
            index: Some(index),
            name: rule.to_string(),
        })
    }

    /// Parse a prefix of `input` with `rule`.
    pub fn parse(&self, rule: &str, input: &str) -> Result<ParseResult<Value>> {
        let index = self.index_of(rule)?;
        Ok(self.table.invoke(index, input, Pos::START))
    }

    /// Parse a prefix of `input` with the first rule.
    pub fn parse_entry(&self, input: &str) -> Result<ParseResult<Value>> {
        let rule = self
            .entry_rule()
            .ok_or_else(|| Error::EmptyGrammar(self.name.clone()))?;
        self.parse(rule, input)
    }

    /// Parse all of `input` with `rule`; leftover input is a failure.
    pub fn parse_complete(&self, rule: &str, input: &str) -> Result<ParseResult<Value>> {
        let result = self.parse(rule, input)?;
        Ok(result.and_then(|success| {
            end_of_input().parse(input, success.next)?;
            Ok(success)
        }))
    }

    /// Like [`parse`](Self::parse) or [`parse_complete`](Self::parse_complete),
    /// reporting every rule entry and exit to `tracer`.
    pub fn parse_traced(
        &self,
        rule: &str,
        input: &str,
        complete: bool,
        tracer: SharedTracer,
    ) -> Result<ParseResult<Value>> {
        self.table.tracer.replace(Some(tracer));
        let result = if complete {
            self.parse_complete(rule, input)
        } else {
            self.parse(rule, input)
        };
        self.table.tracer.replace(None);
        result
    }

    fn index_of(&self, rule: &str) -> Result<usize> {
        self.table
            .rules
            .get_index_of(rule)
            .ok_or_else(|| Error::UnknownRule(rule.to_string()))
    }
}
