//! Zero-width assertions.

use pegloom_core::{ParseError, Pos, Success};

use crate::{Parser, from_fn};

/// `&e`: succeed without consuming when `parser` matches here.
pub fn and_predicate<P: Parser>(parser: P) -> impl Parser<Output = ()> {
    from_fn(move |input: &str, pos: Pos| match parser.parse(input, pos) {
        Ok(_) => Ok(Success::empty((), pos)),
        Err(error) => Err(error.with_context("in positive lookahead")),
    })
}

/// `!e`: succeed without consuming when `parser` does not match here.
pub fn not_predicate<P: Parser>(parser: P) -> impl Parser<Output = ()> {
    from_fn(move |input: &str, pos: Pos| match parser.parse(input, pos) {
        Ok(_) => Err(ParseError::new(
            "Negative lookahead failed: expected pattern not to match",
            pos,
        )),
        Err(_) => Ok(Success::empty((), pos)),
    })
}
