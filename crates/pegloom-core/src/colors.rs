//! Terminal color roles.
//!
//! Output is colored by what a span means, not by hue:
//! - `rule`: rule names in dumps, traces and issue locations
//! - `text`: matched input and string values
//! - `failure`: failed attempts, errors, rules on a cycle
//! - `muted`: positions, punctuation, documentation

/// ANSI escapes for each role, or empty strings when output is plain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub rule: &'static str,
    pub text: &'static str,
    pub failure: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        rule: "\x1b[34m",
        text: "\x1b[32m",
        failure: "\x1b[31m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        rule: "",
        text: "",
        failure: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Wrap `value` in `role` and a reset. Plain output stays untouched.
    pub fn paint(&self, role: &str, value: impl std::fmt::Display) -> String {
        if role.is_empty() {
            return value.to_string();
        }
        format!("{role}{value}{}", self.reset)
    }
}
