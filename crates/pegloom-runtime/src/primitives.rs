//! Leaf matchers.

use pegloom_core::grammar::CharRange;
use pegloom_core::utils::{describe_char, quote, truncate_text};
use pegloom_core::{END_OF_INPUT, ParseError, Pos, Success, next_char, unicode_length};

use crate::{Parser, from_fn};

/// Maximum characters of remaining input quoted in `found`.
const FOUND_PREVIEW: usize = 16;

/// Match `expected` exactly.
///
/// On failure `found` holds the input prefix with as many characters as
/// `expected`, or the end-of-input marker. The empty literal always succeeds
/// without consuming.
pub fn literal(expected: impl Into<String>) -> impl Parser<Output = String> {
    let expected: String = expected.into();
    let width = unicode_length(&expected);
    let message = format!("Expected {}", quote(&expected));

    from_fn(move |input: &str, pos: Pos| {
        let rest = pos.rest(input);
        if rest.starts_with(expected.as_str()) {
            let next = pos.advance(&expected);
            return Ok(Success::new(expected.clone(), pos, next));
        }

        let found = if rest.is_empty() {
            END_OF_INPUT.to_string()
        } else {
            rest.chars().take(width).collect()
        };
        Err(ParseError::new(message.clone(), pos)
            .with_expected(expected.clone())
            .with_found(found))
    })
}

/// Match one character inside (or, if `negated`, outside) the union of
/// inclusive `ranges`.
pub fn char_class(
    ranges: impl IntoIterator<Item = CharRange>,
    negated: bool,
) -> impl Parser<Output = char> {
    let ranges: Vec<CharRange> = ranges.into_iter().collect();
    let description = describe_class(&ranges, negated);

    from_fn(move |input: &str, pos: Pos| {
        let Some((c, _)) = next_char(input, pos.offset) else {
            return Err(ParseError::new("Unexpected end of input", pos)
                .with_expected(description.clone())
                .with_found(END_OF_INPUT));
        };

        if ranges.iter().any(|r| r.contains(c)) != negated {
            return Ok(Success::new(c, pos, pos.advance_char(c)));
        }

        let message = format!("Expected {description} but found {}", describe_char(c));
        Err(ParseError::new(message, pos)
            .with_expected(description.clone())
            .with_found(c.to_string()))
    })
}

/// Match any single character.
pub fn any_char() -> impl Parser<Output = char> {
    from_fn(|input: &str, pos: Pos| match next_char(input, pos.offset) {
        Some((c, _)) => Ok(Success::new(c, pos, pos.advance_char(c))),
        None => Err(ParseError::new("Unexpected end of input", pos)
            .with_expected("any character")
            .with_found(END_OF_INPUT)),
    })
}

/// Succeed, without consuming, only when no input remains.
pub fn end_of_input() -> impl Parser<Output = ()> {
    from_fn(|input: &str, pos: Pos| {
        if pos.is_at_end(input) {
            return Ok(Success::empty((), pos));
        }
        Err(ParseError::new("Expected end of input", pos)
            .with_expected(END_OF_INPUT)
            .with_found(truncate_text(pos.rest(input), FOUND_PREVIEW)))
    })
}

/// Bracketed rendering of a character class: `[a-z_]`, `[^0-9]`.
pub fn describe_class(ranges: &[CharRange], negated: bool) -> String {
    let body: String = ranges.iter().map(ToString::to_string).collect();
    if negated {
        format!("[^{body}]")
    } else {
        format!("[{body}]")
    }
}
