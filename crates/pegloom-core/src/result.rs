//! Parse results and errors.
//!
//! Failures are ordinary values: combinators inspect and recover from them,
//! so nothing in the parsing path panics or unwinds.

use crate::Pos;

/// Marker used as `found` when the input is exhausted.
pub const END_OF_INPUT: &str = "end of input";

/// Outcome of running a parser.
pub type ParseResult<T> = std::result::Result<Success<T>, ParseError>;

/// A successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Success<T> {
    pub val: T,
    /// Position the parser started at.
    pub current: Pos,
    /// Position after consumption (equals `current` for non-consuming results).
    pub next: Pos,
}

impl<T> Success<T> {
    pub fn new(val: T, current: Pos, next: Pos) -> Self {
        Self { val, current, next }
    }

    /// A success that consumed nothing.
    pub fn empty(val: T, pos: Pos) -> Self {
        Self {
            val,
            current: pos,
            next: pos,
        }
    }

    /// Replace the value, keeping positions.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            val: f(self.val),
            current: self.current,
            next: self.next,
        }
    }

    pub fn is_consuming(&self) -> bool {
        self.next.offset != self.current.offset
    }

    /// Input text consumed by this success.
    pub fn consumed<'i>(&self, input: &'i str) -> &'i str {
        input.get(self.current.offset..self.next.offset).unwrap_or("")
    }
}

/// A failed parse.
///
/// `context` is append-only: each combinator a failure propagates through may
/// push a breadcrumb, nothing ever removes one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {pos}")]
pub struct ParseError {
    pub message: String,
    pub pos: Pos,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub parser_name: Option<String>,
    pub context: Vec<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, pos: Pos) -> Self {
        Self {
            message: message.into(),
            pos,
            expected: Vec::new(),
            found: None,
            parser_name: None,
            context: Vec::new(),
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected.push(expected.into());
        self
    }

    pub fn with_expected_all<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected.extend(expected.into_iter().map(Into::into));
        self
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn with_parser_name(mut self, name: impl Into<String>) -> Self {
        self.parser_name = Some(name.into());
        self
    }

    /// Push a breadcrumb onto the context chain.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Prepend `prefix` to the message, keeping everything else.
    pub fn prefixed(mut self, prefix: impl std::fmt::Display) -> Self {
        self.message = format!("{prefix}{}", self.message);
        self
    }

    /// Whether the failure happened because the input ran out.
    pub fn is_end_of_input(&self) -> bool {
        self.found.as_deref() == Some(END_OF_INPUT)
    }
}

/// Convenience accessors on [`ParseResult`].
pub trait ParseResultExt<T> {
    /// Value of a successful parse.
    ///
    /// # Panics
    /// Panics with the rendered error if the parse failed.
    fn unwrap_value(self) -> T;

    fn value(&self) -> Option<&T>;

    fn next_pos(&self) -> Option<Pos>;
}

impl<T> ParseResultExt<T> for ParseResult<T> {
    #[track_caller]
    fn unwrap_value(self) -> T {
        match self {
            Ok(success) => success.val,
            Err(error) => crate::invariants::failed_unwrap_value(&error),
        }
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok().map(|s| &s.val)
    }

    fn next_pos(&self) -> Option<Pos> {
        self.as_ref().ok().map(|s| s.next)
    }
}
