//! Grammar AST for PEG grammars.
//!
//! This module provides the expression tree shared by the combinator compiler
//! and the type-inference engine, with JSON and compact binary encodings.

mod binary;
mod builders;
mod json;
mod types;

#[cfg(test)]
mod builders_tests;
#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Annotation, CharRange, Expr, GrammarDefinition, Quote, RuleDefinition};
