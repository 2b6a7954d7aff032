//! Values produced by compiled grammars.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use pegloom_core::Colors;

/// Self-contained parse output.
///
/// Matched text becomes `String`, sequences and repetitions `Array`, absent
/// optionals and lookaheads `Null`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    String(String),
    Array(Vec<Value>),
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// All matched text, concatenated in order.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Format value as colored JSON.
    ///
    /// Color scheme (jq-inspired):
    /// - String values: Green
    /// - null: Dim
    /// - Structure `[],`: Dim
    pub fn format(&self, pretty: bool, colors: Colors) -> String {
        let mut out = String::new();
        format_value(&mut out, self, &colors, pretty, 0);
        out
    }
}

fn collect_text(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push_str(s),
        Value::Array(items) => items.iter().for_each(|v| collect_text(v, out)),
    }
}

fn format_value(out: &mut String, value: &Value, c: &Colors, pretty: bool, indent: usize) {
    match value {
        Value::Null => out.push_str(&c.paint(c.muted, "null")),
        Value::String(s) => out.push_str(&c.paint(c.text, pegloom_core::utils::quote(s))),
        Value::Array(items) => format_array(out, items, c, pretty, indent),
    }
}

fn format_array(out: &mut String, items: &[Value], c: &Colors, pretty: bool, indent: usize) {
    out.push_str(&c.paint(c.muted, '['));
    if items.is_empty() {
        out.push_str(&c.paint(c.muted, ']'));
        return;
    }

    let inner = indent + 2;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(&c.paint(c.muted, ','));
        }
        if pretty {
            out.push('\n');
            out.push_str(&" ".repeat(inner));
        }
        format_value(out, item, c, pretty, inner);
    }
    if pretty {
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }
    out.push_str(&c.paint(c.muted, ']'));
}
