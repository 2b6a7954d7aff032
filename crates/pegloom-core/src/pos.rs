//! Input positions.
//!
//! `offset` is measured in UTF-8 code units (bytes) so it can slice the input
//! directly. `column` counts characters since the last line break.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable coordinates of a point in the input.
///
/// A new `Pos` is produced for every consumed character or string;
/// positions are never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Code units consumed from the start of the input.
    pub offset: usize,
    /// Characters consumed since the last `\n`.
    pub column: usize,
    /// 1-based line number.
    pub line: usize,
}

impl Pos {
    /// Start of any input.
    pub const START: Self = Self {
        offset: 0,
        column: 0,
        line: 1,
    };

    pub const fn new(offset: usize, column: usize, line: usize) -> Self {
        Self {
            offset,
            column,
            line,
        }
    }

    /// Position after consuming `text` starting at `self`.
    ///
    /// Empty `text` returns `self` unchanged.
    pub fn advance(self, text: &str) -> Self {
        text.chars().fold(self, Self::advance_char)
    }

    /// Position after consuming a single character.
    pub fn advance_char(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        if c == '\n' {
            Self {
                offset,
                column: 0,
                line: self.line + 1,
            }
        } else {
            Self {
                offset,
                column: self.column + 1,
                line: self.line,
            }
        }
    }

    /// Remaining input at this position.
    ///
    /// Returns an empty string when the offset is past the end or not on a
    /// character boundary.
    pub fn rest(self, input: &str) -> &str {
        input.get(self.offset..).unwrap_or("")
    }

    /// Whether this position is at or past the end of `input`.
    pub fn is_at_end(self, input: &str) -> bool {
        self.offset >= input.len()
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Character at `offset` and its length in code units.
///
/// Returns `None` when `offset` is out of range or does not fall on a
/// character boundary.
pub fn next_char(text: &str, offset: usize) -> Option<(char, usize)> {
    let c = text.get(offset..)?.chars().next()?;
    Some((c, c.len_utf8()))
}

/// Number of Unicode scalar values in `text`.
pub fn unicode_length(text: &str) -> usize {
    text.chars().count()
}
