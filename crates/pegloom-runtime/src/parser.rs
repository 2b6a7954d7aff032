//! The parser contract and its extension methods.

use std::cell::RefCell;
use std::rc::Rc;

use pegloom_core::{ParseError, ParseResult, Pos, Success};

use crate::trace::Tracer;
use crate::{combinators, lookahead, repetition, trace, transform};

/// A function from `(input, pos)` to a [`ParseResult`].
///
/// Implementations must be pure: no observable state may influence the
/// result, so a parser can be retried at any position by any combinator.
pub trait Parser {
    type Output;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<Self::Output>;

    /// `false` for a slot that has no body yet, such as a forward
    /// declaration that was never defined.
    ///
    /// List combinators check this before running anything.
    fn is_defined(&self) -> bool {
        true
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<Self::Output> {
        (**self).parse(input, pos)
    }

    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<Self::Output> {
        (**self).parse(input, pos)
    }

    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Output = P::Output;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<Self::Output> {
        (**self).parse(input, pos)
    }

    fn is_defined(&self) -> bool {
        (**self).is_defined()
    }
}

/// Type-erased parser, used wherever parsers of one output type are listed.
pub type BoxedParser<T> = Box<dyn Parser<Output = T>>;

/// Parser backed by a plain function or closure.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`Parser`].
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(&str, Pos) -> ParseResult<T>,
{
    FromFn(f)
}

impl<T, F> Parser for FromFn<F>
where
    F: Fn(&str, Pos) -> ParseResult<T>,
{
    type Output = T;

    #[inline]
    fn parse(&self, input: &str, pos: Pos) -> ParseResult<T> {
        (self.0)(input, pos)
    }
}

/// Method-call sugar for the free-standing combinators.
pub trait ParserExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    fn map<U, F>(self, f: F) -> impl Parser<Output = U>
    where
        F: Fn(Self::Output) -> U,
    {
        transform::map(self, f)
    }

    fn map_result<U, F>(self, f: F) -> impl Parser<Output = U>
    where
        F: Fn(Success<Self::Output>) -> U,
    {
        transform::map_result(self, f)
    }

    fn map_error<F>(self, f: F) -> impl Parser<Output = Self::Output>
    where
        F: Fn(ParseError) -> ParseError,
    {
        transform::map_error(self, f)
    }

    fn filter<F>(self, predicate: F, message: impl Into<String>) -> impl Parser<Output = Self::Output>
    where
        F: Fn(&Self::Output) -> bool,
    {
        transform::filter(self, predicate, message)
    }

    fn tap<F>(self, effect: F) -> impl Parser<Output = Self::Output>
    where
        F: Fn(&Success<Self::Output>),
    {
        transform::tap(self, effect)
    }

    fn named(self, name: impl Into<String>) -> impl Parser<Output = Self::Output> {
        transform::named(name, self)
    }

    fn maybe(self) -> impl Parser<Output = Option<Self::Output>> {
        combinators::maybe(self)
    }

    fn with_default(self, default: Self::Output) -> impl Parser<Output = Self::Output>
    where
        Self::Output: Clone,
    {
        combinators::with_default(self, default)
    }

    fn reject(self) -> impl Parser<Output = Option<Self::Output>> {
        combinators::reject(self)
    }

    fn star(self) -> impl Parser<Output = Vec<Self::Output>> {
        repetition::star(self)
    }

    fn plus(self) -> impl Parser<Output = Vec<Self::Output>> {
        repetition::plus(self)
    }

    fn repeat(self, min: usize, max: Option<usize>) -> impl Parser<Output = Vec<Self::Output>> {
        repetition::repeat(self, min, max)
    }

    fn and_predicate(self) -> impl Parser<Output = ()> {
        lookahead::and_predicate(self)
    }

    fn not_predicate(self) -> impl Parser<Output = ()> {
        lookahead::not_predicate(self)
    }

    fn traced<R>(self, name: impl Into<String>, tracer: Rc<RefCell<R>>) -> impl Parser<Output = Self::Output>
    where
        R: Tracer + ?Sized,
    {
        trace::traced(name, self, tracer)
    }
}

impl<P: Parser> ParserExt for P {}
