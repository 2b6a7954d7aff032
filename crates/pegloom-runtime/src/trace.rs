//! Tracing infrastructure for debugging parser execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! With `NoopTracer` every callback is an `#[inline(always)]` empty function,
//! so the compiler removes the calls and their arguments. Parsers that are
//! never wrapped in [`traced`] pay nothing at all.
//!
//! # Design: Tracer-Owned State
//!
//! Nesting depth and the collected log live in the tracer, not in parsers or
//! positions. The tracer is shared through `Rc<RefCell<_>>` and borrowed only
//! around each callback, so traced parsers may nest and recurse freely.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pegloom_core::utils::{quote, truncate_text};
use pegloom_core::{Colors, ParseError, Pos};

use crate::{Parser, from_fn};

/// Maximum characters of matched text shown per line.
const TEXT_BUDGET: usize = 24;

/// Instrumentation callbacks around a named parser.
///
/// - `enter_rule` - before the parser runs
/// - `exit_success` - after it matched `matched` between `current` and `next`
/// - `exit_failure` - after it failed
pub trait Tracer {
    fn enter_rule(&mut self, name: &str, pos: Pos);

    fn exit_success(&mut self, name: &str, matched: &str, current: Pos, next: Pos);

    fn exit_failure(&mut self, name: &str, error: &ParseError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn enter_rule(&mut self, _name: &str, _pos: Pos) {}

    #[inline(always)]
    fn exit_success(&mut self, _name: &str, _matched: &str, _current: Pos, _next: Pos) {}

    #[inline(always)]
    fn exit_failure(&mut self, _name: &str, _error: &ParseError) {}
}

/// Tracer that collects an indented, line-per-event log.
///
/// ```text
/// > sum 1:0
///   > num 1:0
///   + num "12" 1:0..1:2
/// + sum "12" 1:0..1:2
/// ```
pub struct PrintTracer {
    lines: Vec<String>,
    depth: usize,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }
}

impl Tracer for PrintTracer {
    fn enter_rule(&mut self, name: &str, pos: Pos) {
        let c = self.colors;
        self.push(format!("> {} {}", c.paint(c.rule, name), c.paint(c.muted, pos)));
        self.depth += 1;
    }

    fn exit_success(&mut self, name: &str, matched: &str, current: Pos, next: Pos) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let text = truncate_text(&quote(matched), TEXT_BUDGET);
        self.push(format!(
            "+ {} {} {}",
            c.paint(c.rule, name),
            c.paint(c.text, text),
            c.paint(c.muted, format_args!("{current}..{next}"))
        ));
    }

    fn exit_failure(&mut self, name: &str, error: &ParseError) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        self.push(format!(
            "- {} {} {}",
            c.paint(c.rule, name),
            c.paint(c.failure, &error.message),
            c.paint(c.muted, error.pos)
        ));
    }
}

impl fmt::Display for PrintTracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Report entry and exit of `parser` to `tracer`. The result is unchanged.
pub fn traced<P, R>(
    name: impl Into<String>,
    parser: P,
    tracer: Rc<RefCell<R>>,
) -> impl Parser<Output = P::Output>
where
    P: Parser,
    R: Tracer + ?Sized,
{
    let name = name.into();
    from_fn(move |input: &str, pos: Pos| {
        tracer.borrow_mut().enter_rule(&name, pos);
        let result = parser.parse(input, pos);
        match &result {
            Ok(success) => {
                let matched = success.consumed(input);
                tracer
                    .borrow_mut()
                    .exit_success(&name, matched, success.current, success.next);
            }
            Err(error) => tracer.borrow_mut().exit_failure(&name, error),
        }
        result
    })
}
