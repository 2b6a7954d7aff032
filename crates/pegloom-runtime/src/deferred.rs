//! Forward declarations for recursive grammars.

use std::cell::OnceCell;
use std::rc::Rc;

use pegloom_core::{ParseError, ParseResult, Pos};

use crate::{BoxedParser, Parser};

/// A parser whose body is supplied after construction.
///
/// Clones share the same slot, so a clone can be embedded in its own body.
/// Such a self-reference is a reference cycle: the parser lives as long as
/// the process unless every clone is dropped before the body is defined.
pub struct Deferred<T> {
    slot: Rc<OnceCell<BoxedParser<T>>>,
}

/// Returned by [`Deferred::define`] when the slot already has a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("deferred parser is already defined")]
pub struct AlreadyDefined;

impl<T> Deferred<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Supply the body. A slot can be defined once.
    pub fn define(&self, parser: impl Parser<Output = T> + 'static) -> Result<(), AlreadyDefined> {
        self.slot.set(Box::new(parser)).map_err(|_| AlreadyDefined)
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Parser for Deferred<T> {
    type Output = T;

    fn parse(&self, input: &str, pos: Pos) -> ParseResult<T> {
        match self.slot.get() {
            Some(parser) => parser.parse(input, pos),
            None => Err(ParseError::new("Deferred parser used before definition", pos)),
        }
    }

    fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}
