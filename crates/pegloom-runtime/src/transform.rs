//! Result transforms.
//!
//! None of these change where a parser starts or how far it consumes, except
//! `filter`, which can turn a success into a failure.

use pegloom_core::{ParseError, Pos, Success};

use crate::{Parser, from_fn};

pub fn map<P, U, F>(parser: P, f: F) -> impl Parser<Output = U>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    from_fn(move |input: &str, pos: Pos| parser.parse(input, pos).map(|s| s.map(&f)))
}

/// Like [`map`], but `f` also sees the start and end positions.
pub fn map_result<P, U, F>(parser: P, f: F) -> impl Parser<Output = U>
where
    P: Parser,
    F: Fn(Success<P::Output>) -> U,
{
    from_fn(move |input: &str, pos: Pos| {
        let success = parser.parse(input, pos)?;
        let (current, next) = (success.current, success.next);
        Ok(Success::new(f(success), current, next))
    })
}

pub fn map_error<P, F>(parser: P, f: F) -> impl Parser<Output = P::Output>
where
    P: Parser,
    F: Fn(ParseError) -> ParseError,
{
    from_fn(move |input: &str, pos: Pos| parser.parse(input, pos).map_err(&f))
}

/// Reject successes whose value fails `predicate`.
///
/// The failure is reported at the position after the parsed value.
pub fn filter<P, F>(parser: P, predicate: F, message: impl Into<String>) -> impl Parser<Output = P::Output>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    let message = message.into();
    from_fn(move |input: &str, pos: Pos| {
        let success = parser.parse(input, pos)?;
        if predicate(&success.val) {
            Ok(success)
        } else {
            Err(ParseError::new(message.clone(), success.next))
        }
    })
}

/// Observe successes without changing them.
pub fn tap<P, F>(parser: P, effect: F) -> impl Parser<Output = P::Output>
where
    P: Parser,
    F: Fn(&Success<P::Output>),
{
    from_fn(move |input: &str, pos: Pos| {
        let success = parser.parse(input, pos)?;
        effect(&success);
        Ok(success)
    })
}

/// Attach `name` to failures that are not already attributed to a parser.
pub fn named<P: Parser>(name: impl Into<String>, parser: P) -> impl Parser<Output = P::Output> {
    let name = name.into();
    from_fn(move |input: &str, pos: Pos| {
        parser.parse(input, pos).map_err(|error| match error.parser_name {
            Some(_) => error,
            None => error.with_parser_name(name.clone()),
        })
    })
}
