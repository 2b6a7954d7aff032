#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar-level tooling on top of the combinator runtime.
//!
//! Three independent consumers of a [`GrammarDefinition`]:
//! - [`compile`]: build combinator parsers producing [`Value`]s
//! - [`infer`]: compute a static [`TypeDescriptor`] per rule without parsing
//! - [`check`]: report grammar problems before anything runs
//!
//! [`GrammarDefinition`]: pegloom_core::grammar::GrammarDefinition

pub mod check;
pub mod compile;
mod diagnostics;
mod error;
pub mod infer;
mod invariants;
mod shape;

#[cfg(test)]
mod diagnostics_tests;

pub use check::{GrammarIssue, Severity, check_grammar};
pub use compile::{CompiledGrammar, Value, compile};
pub use diagnostics::{ErrorPrinter, ParseErrorPrinter};
pub use error::{Error, Result};
pub use infer::{
    BaseType, GrammarTypes, TypeDescriptor, TypeInference, TypeInferenceOptions, VoidType,
    infer_grammar_types,
};
