//! Sequencing, ordered choice, optional and rejection.

use indexmap::IndexSet;
use pegloom_core::{ParseError, Pos, Success};

use crate::{BoxedParser, Parser, from_fn};

/// Run parsers left to right, each starting where the previous one stopped.
///
/// The empty sequence succeeds with no values at `pos`. The first failure is
/// reported with its own position, its message prefixed by the failing index,
/// and `"in sequence"` pushed onto its context.
pub fn sequence<T>(parsers: Vec<BoxedParser<T>>) -> impl Parser<Output = Vec<T>> {
    from_fn(move |input: &str, pos: Pos| {
        if let Some(error) = undefined_entry(&parsers, pos) {
            return Err(error);
        }

        let mut values = Vec::with_capacity(parsers.len());
        let mut next = pos;
        for (i, parser) in parsers.iter().enumerate() {
            match parser.parse(input, next) {
                Ok(success) => {
                    next = success.next;
                    values.push(success.val);
                }
                Err(error) => {
                    return Err(error
                        .prefixed(format!("Sequence failed at index {i}: "))
                        .with_context("in sequence"));
                }
            }
        }
        Ok(Success::new(values, pos, next))
    })
}

/// Try parsers in order at the same position; the first success wins.
///
/// When every alternative fails, the error sits at `pos` and lists the
/// alternatives' `expected` entries de-duplicated in first-seen order.
pub fn choice<T>(parsers: Vec<BoxedParser<T>>) -> impl Parser<Output = T> {
    from_fn(move |input: &str, pos: Pos| {
        if parsers.is_empty() {
            return Err(ParseError::new("Empty choice", pos));
        }
        if let Some(error) = undefined_entry(&parsers, pos) {
            return Err(error);
        }

        let mut expected = IndexSet::new();
        let mut found = None;
        for parser in &parsers {
            match parser.parse(input, pos) {
                Ok(success) => return Ok(success),
                Err(error) => {
                    expected.extend(error.expected);
                    found = found.or(error.found);
                }
            }
        }

        let message = if expected.is_empty() {
            "No expectations provided".to_string()
        } else {
            let list: Vec<&str> = expected.iter().map(String::as_str).collect();
            format!("None of the parsers matched. Expected one of: {}", list.join(", "))
        };
        let error = ParseError::new(message, pos).with_expected_all(expected);
        Err(match found {
            Some(found) => error.with_found(found),
            None => error,
        })
    })
}

/// Always succeed: `Some` with the parser's value, or `None` without consuming.
pub fn maybe<P: Parser>(parser: P) -> impl Parser<Output = Option<P::Output>> {
    from_fn(move |input: &str, pos: Pos| match parser.parse(input, pos) {
        Ok(success) => Ok(success.map(Some)),
        Err(_) => Ok(Success::empty(None, pos)),
    })
}

/// Like [`maybe`], substituting `default` on failure.
pub fn with_default<P>(parser: P, default: P::Output) -> impl Parser<Output = P::Output>
where
    P: Parser,
    P::Output: Clone,
{
    from_fn(move |input: &str, pos: Pos| match parser.parse(input, pos) {
        Ok(success) => Ok(success),
        Err(_) => Ok(Success::empty(default.clone(), pos)),
    })
}

/// Succeed with `None`, consuming nothing, exactly when `parser` fails.
pub fn reject<P: Parser>(parser: P) -> impl Parser<Output = Option<P::Output>> {
    from_fn(move |input: &str, pos: Pos| match parser.parse(input, pos) {
        Ok(_) => Err(ParseError::new("Expected parser to fail", pos)),
        Err(_) => Ok(Success::empty(None, pos)),
    })
}

/// Failure for the first entry without a body, if any.
fn undefined_entry<T>(parsers: &[BoxedParser<T>], pos: Pos) -> Option<ParseError> {
    let index = parsers.iter().position(|p| !p.is_defined())?;
    Some(ParseError::new(format!("Parser at index {index} is undefined"), pos))
}
