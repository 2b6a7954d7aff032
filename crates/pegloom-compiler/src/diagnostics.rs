//! Builder-pattern printer for parse failures.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use pegloom_core::ParseError;

/// Renders a [`ParseError`] against the input it was produced from.
///
/// Without a source only the one-line form (`message at line:column`) is
/// written.
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(self.error.pos.offset, source);
        let mut annotation = AnnotationKind::Primary.span(range);
        let label = self.label();
        if let Some(label) = &label {
            annotation = annotation.label(label);
        }

        let mut snippet = Snippet::source(source).line_start(1).annotation(annotation);
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let title = self.title();
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))?;

        for context in &self.error.context {
            write!(w, "\n  = note: {context}")?;
        }
        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "error: {}", self.error)?;
        if let Some(label) = self.label() {
            write!(w, "\n  = {label}")?;
        }
        for context in &self.error.context {
            write!(w, "\n  = note: {context}")?;
        }
        Ok(())
    }

    fn title(&self) -> String {
        match &self.error.parser_name {
            Some(name) => format!("{} (in `{name}`)", self.error.message),
            None => self.error.message.clone(),
        }
    }

    /// `expected …, found …` from whichever parts the error carries.
    fn label(&self) -> Option<String> {
        let expected = match self.error.expected.as_slice() {
            [] => None,
            [one] => Some(format!("expected {one}")),
            many => Some(format!("expected one of {}", many.join(", "))),
        };
        let found = self.error.found.as_ref().map(|f| format!("found {f}"));
        match (expected, found) {
            (Some(e), Some(f)) => Some(format!("{e}, {f}")),
            (e, f) => e.or(f),
        }
    }
}

/// Widen a position to a one-character span, snapped to character
/// boundaries and capped at the end of the source.
fn adjust_range(offset: usize, source: &str) -> std::ops::Range<usize> {
    let start = offset.min(source.len());
    let start = (0..=start)
        .rev()
        .find(|&i| source.is_char_boundary(i))
        .unwrap_or(0);
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    start..end
}

impl ParseErrorPrinter for ParseError {
    fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}

/// Shorthand for [`ErrorPrinter::new`].
pub trait ParseErrorPrinter {
    fn printer(&self) -> ErrorPrinter<'_, '_>;
}
