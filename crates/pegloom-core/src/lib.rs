#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for pegloom.
//!
//! Three layers:
//! - **Position model** (`Pos`): immutable input coordinates
//! - **Result model** (`ParseResult`, `Success`, `ParseError`): what every parser returns
//! - **Grammar AST** (`grammar`): the expression tree both the combinator compiler
//!   and the type-inference engine walk

mod colors;
pub mod grammar;
mod invariants;
mod pos;
mod result;
pub mod utils;


pub use colors::Colors;
pub use pos::{Pos, next_char, unicode_length};
pub use result::{END_OF_INPUT, ParseError, ParseResult, ParseResultExt, Success};
