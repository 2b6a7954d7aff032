//! Compile grammar definitions into parsers.

mod grammar;
mod value;

#[cfg(test)]
mod grammar_tests;

pub use grammar::{CompiledGrammar, RuleRef, SharedTracer, compile};
pub use value::Value;
