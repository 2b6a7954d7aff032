#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parser combinators for Parsing Expression Grammars.
//!
//! Every parser is a pure function of `(input, pos)`: running it twice with
//! the same arguments yields the same result. Failures are values carried in
//! [`ParseResult`]; nothing here panics on bad input.
//!
//! Layers, bottom-up:
//! - [`primitives`]: literal, character-class and any-character matchers
//! - [`combinators`]: sequence, ordered choice, optional, rejection
//! - [`repetition`]: `*`, `+` and bounded repetition with progress checks
//! - [`lookahead`]: `&e` and `!e`
//! - [`transform`]: value and error transforms
//! - [`trace`]: optional instrumentation

pub mod combinators;
mod deferred;
pub mod lookahead;
mod parser;
pub mod primitives;
pub mod repetition;
pub mod trace;
pub mod transform;

#[cfg(test)]
mod primitives_tests;

pub use deferred::{AlreadyDefined, Deferred};
pub use parser::{BoxedParser, FromFn, Parser, ParserExt, from_fn};
pub use trace::{NoopTracer, PrintTracer, Tracer};

pub use pegloom_core::{ParseError, ParseResult, ParseResultExt, Pos, Success};
