//! Repetition with progress checks.
//!
//! A body that succeeds without consuming input would repeat forever. Every
//! repetition therefore fails outright on the first non-advancing success,
//! including on the very first iteration.

use pegloom_core::{ParseError, Pos, Success};

use crate::{Parser, from_fn};

/// Zero or more matches.
pub fn star<P: Parser>(parser: P) -> impl Parser<Output = Vec<P::Output>> {
    from_fn(move |input: &str, pos: Pos| {
        let run = collect(&parser, input, pos, None)?;
        Ok(Success::new(run.values, pos, run.next))
    })
}

/// One or more matches. With no match, the body's own error is returned.
pub fn plus<P: Parser>(parser: P) -> impl Parser<Output = Vec<P::Output>> {
    from_fn(move |input: &str, pos: Pos| {
        let run = collect(&parser, input, pos, None)?;
        match run.stop {
            Some(error) if run.values.is_empty() => Err(error.with_context("in repetition")),
            _ => Ok(Success::new(run.values, pos, run.next)),
        }
    })
}

/// Between `min` and `max` matches (`None` is unbounded).
///
/// Matching stops as soon as `max` is reached. Too few matches fail at the
/// position where the next match was attempted.
pub fn repeat<P: Parser>(
    parser: P,
    min: usize,
    max: Option<usize>,
) -> impl Parser<Output = Vec<P::Output>> {
    from_fn(move |input: &str, pos: Pos| {
        let run = collect(&parser, input, pos, max)?;
        let count = run.values.len();
        if count >= min {
            return Ok(Success::new(run.values, pos, run.next));
        }

        let message = format!("Expected at least {min} repetitions, found {count}");
        let mut error = ParseError::new(message, run.next).with_context("in repetition");
        if let Some(stop) = run.stop {
            error = error.with_expected_all(stop.expected);
            if let Some(found) = stop.found {
                error = error.with_found(found);
            }
        }
        Err(error)
    })
}

struct Run<T> {
    values: Vec<T>,
    next: Pos,
    /// Error of the attempt that ended the run; `None` when `max` was reached.
    stop: Option<ParseError>,
}

fn collect<P: Parser + ?Sized>(
    parser: &P,
    input: &str,
    pos: Pos,
    max: Option<usize>,
) -> Result<Run<P::Output>, ParseError> {
    let mut values = Vec::new();
    let mut next = pos;
    loop {
        if max.is_some_and(|max| values.len() >= max) {
            return Ok(Run {
                values,
                next,
                stop: None,
            });
        }

        match parser.parse(input, next) {
            Ok(success) if !success.is_consuming() => {
                let count = values.len();
                let noun = if count == 1 { "iteration" } else { "iterations" };
                let message = format!(
                    "Infinite loop detected: repetition body matched without consuming input after {count} {noun}"
                );
                return Err(ParseError::new(message, next).with_context("in repetition"));
            }
            Ok(success) => {
                next = success.next;
                values.push(success.val);
            }
            Err(error) => {
                return Ok(Run {
                    values,
                    next,
                    stop: Some(error),
                });
            }
        }
    }
}
