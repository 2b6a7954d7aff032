//! Grammar-level inference results and their text rendering.

use std::fmt::Write;
use std::rc::Rc;

use indexmap::IndexMap;
use pegloom_core::Colors;

use super::descriptor::TypeDescriptor;

/// Per-rule types of a grammar.
#[derive(Clone, Debug, Default)]
pub struct GrammarTypes {
    /// Rule types in definition order.
    pub rule_types: IndexMap<String, Rc<TypeDescriptor>>,
    /// Closed cycles (`[a, b, a]`), one per distinct cycle.
    pub circular_dependencies: Vec<Vec<String>>,
}

impl GrammarTypes {
    pub fn get(&self, rule: &str) -> Option<&Rc<TypeDescriptor>> {
        self.rule_types.get(rule)
    }

    pub fn has_cycles(&self) -> bool {
        !self.circular_dependencies.is_empty()
    }

    /// Render as `Rule = type` lines, followed by the circular dependencies.
    ///
    /// ```text
    /// Expr = [Term, ("+" | "-")[]]
    /// Term = string
    ///
    /// Circular dependencies:
    ///   a -> b -> a
    /// ```
    pub fn dump(&self, colors: Colors) -> String {
        let c = colors;
        let mut out = String::new();

        for (name, descriptor) in &self.rule_types {
            if let Some(doc) = &descriptor.documentation {
                for line in doc.lines() {
                    let _ = writeln!(out, "{}", c.paint(c.muted, format_args!("/// {line}")));
                }
            }
            let _ = writeln!(
                out,
                "{} {} {}",
                c.paint(c.rule, name),
                c.paint(c.muted, "="),
                descriptor.type_string
            );
        }

        if self.has_cycles() {
            if !self.rule_types.is_empty() {
                out.push('\n');
            }
            out.push_str("Circular dependencies:\n");
            for cycle in &self.circular_dependencies {
                let arrow = format!(" {} ", c.paint(c.muted, "->"));
                let names: Vec<String> = cycle.iter().map(|n| c.paint(c.failure, n)).collect();
                let _ = writeln!(out, "  {}", names.join(&arrow));
            }
        }

        out
    }
}
