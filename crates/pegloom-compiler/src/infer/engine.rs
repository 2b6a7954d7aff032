//! Recursive type computation over grammar expressions.

use std::collections::HashMap;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use pegloom_core::grammar::{Expr, GrammarDefinition};

use super::descriptor::TypeDescriptor;
use super::dump::GrammarTypes;
use super::options::TypeInferenceOptions;
use crate::invariants::ensure_cache_key;
use crate::shape::Quantifier;

/// Type-inference engine with a structural cache.
///
/// Value-equal `(expression, options)` pairs yield the *same* descriptor
/// (`Rc::ptr_eq`). The cache lives as long as the engine and is never
/// evicted. Results that depended on a circular reference are not cached,
/// because they are only valid for the rule being resolved at the time.
pub struct TypeInference {
    options: TypeInferenceOptions,
    /// Rule table for resolving identifiers. First definition wins.
    rules: IndexMap<String, RuleEntry>,
    cache: HashMap<Vec<u8>, Rc<TypeDescriptor>>,
}

struct RuleEntry {
    pattern: Rc<Expr>,
    documentation: Option<String>,
}

/// Per-walk state: the rules being resolved and the cycles found so far.
#[derive(Default)]
struct Walk {
    visiting: Vec<String>,
    cycles: Vec<Vec<String>>,
    /// Set when the current subtree reached a rule on `visiting`.
    tainted: bool,
}

impl TypeInference {
    /// Engine without a rule table: every identifier is unknown.
    pub fn new(options: TypeInferenceOptions) -> Self {
        Self {
            options,
            rules: IndexMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Engine resolving identifiers against `grammar`'s rules.
    pub fn for_grammar(grammar: &GrammarDefinition, options: TypeInferenceOptions) -> Self {
        let mut engine = Self::new(options);
        for rule in &grammar.rules {
            engine
                .rules
                .entry(rule.name.clone())
                .or_insert_with(|| RuleEntry {
                    pattern: Rc::new(rule.pattern.clone()),
                    documentation: rule.documentation.clone(),
                });
        }
        engine
    }

    pub fn options(&self) -> TypeInferenceOptions {
        self.options
    }

    /// Number of cached descriptors.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Infer with the engine's own options.
    pub fn infer_expression(&mut self, expr: &Expr) -> Rc<TypeDescriptor> {
        self.infer_expression_with(expr, self.options)
    }

    /// Infer with explicit options, sharing the engine's cache.
    pub fn infer_expression_with(
        &mut self,
        expr: &Expr,
        options: TypeInferenceOptions,
    ) -> Rc<TypeDescriptor> {
        let mut walk = Walk::default();
        self.infer(expr, options, &mut walk)
    }

    /// Type of a single rule, or `None` if the grammar has no such rule.
    ///
    /// A rule that lies on a circular dependency is `unknown`.
    pub fn infer_rule(&mut self, name: &str) -> Option<Rc<TypeDescriptor>> {
        let (descriptor, cycles) = self.infer_rule_walk(name)?;
        let cyclic = cycles.iter().any(|cycle| cycle.iter().any(|n| n == name));
        Some(self.finish_rule(name, descriptor, cyclic))
    }

    /// Types for every rule, plus the circular dependencies found.
    ///
    /// Never fails: unknown references and cycles are reported as data.
    pub fn infer_grammar(&mut self) -> GrammarTypes {
        let names: Vec<String> = self.rules.keys().cloned().collect();
        let mut inferred = Vec::with_capacity(names.len());
        let mut circular_dependencies: Vec<Vec<String>> = Vec::new();

        for name in names {
            let Some((descriptor, cycles)) = self.infer_rule_walk(&name) else {
                continue;
            };
            for cycle in cycles {
                if !circular_dependencies.iter().any(|c| same_cycle(c, &cycle)) {
                    circular_dependencies.push(cycle);
                }
            }
            inferred.push((name, descriptor));
        }

        let cyclic: IndexSet<&str> = circular_dependencies
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        let rule_types = inferred
            .into_iter()
            .map(|(name, descriptor)| {
                let descriptor = self.finish_rule(&name, descriptor, cyclic.contains(name.as_str()));
                (name, descriptor)
            })
            .collect();

        GrammarTypes {
            rule_types,
            circular_dependencies,
        }
    }

    fn infer_rule_walk(&mut self, name: &str) -> Option<(Rc<TypeDescriptor>, Vec<Vec<String>>)> {
        let pattern = Rc::clone(&self.rules.get(name)?.pattern);
        let mut walk = Walk {
            visiting: vec![name.to_string()],
            ..Walk::default()
        };
        let descriptor = self.infer(&pattern, self.options, &mut walk);
        Some((descriptor, walk.cycles))
    }

    /// Apply cycle marking and rule documentation.
    fn finish_rule(
        &self,
        name: &str,
        descriptor: Rc<TypeDescriptor>,
        cyclic: bool,
    ) -> Rc<TypeDescriptor> {
        if cyclic {
            return Rc::new(TypeDescriptor::unknown(circular_reference(name)));
        }
        match self.rules.get(name).and_then(|r| r.documentation.as_ref()) {
            Some(doc) => Rc::new((*descriptor).clone().documented(doc.clone())),
            None => descriptor,
        }
    }

    fn infer(
        &mut self,
        expr: &Expr,
        options: TypeInferenceOptions,
        walk: &mut Walk,
    ) -> Rc<TypeDescriptor> {
        let key = ensure_cache_key(postcard::to_allocvec(&(expr, options)));
        if let Some(hit) = self.cache.get(&key) {
            return Rc::clone(hit);
        }

        let outer_tainted = std::mem::replace(&mut walk.tainted, false);
        let descriptor = self.compute(expr, options, walk);
        let tainted = walk.tainted;
        walk.tainted = outer_tainted || tainted;

        if !tainted {
            self.cache.insert(key, Rc::clone(&descriptor));
        }
        descriptor
    }

    fn compute(
        &mut self,
        expr: &Expr,
        options: TypeInferenceOptions,
        walk: &mut Walk,
    ) -> Rc<TypeDescriptor> {
        let void = options.void_type.as_str();
        match expr {
            Expr::StringLiteral { value, .. } => Rc::new(TypeDescriptor::literal(value)),
            Expr::CharacterClass { .. } | Expr::AnyChar => Rc::new(TypeDescriptor::string()),
            Expr::Identifier { name } => self.resolve(name, options, walk),
            Expr::Sequence { elements } => {
                if !options.infer_object_types {
                    return Rc::new(TypeDescriptor::string());
                }
                let parts: Vec<_> = elements
                    .iter()
                    .map(|e| self.infer(e, options, walk))
                    .collect();
                Rc::new(TypeDescriptor::tuple(&parts))
            }
            Expr::Choice { alternatives } => {
                if !options.infer_union_types {
                    return Rc::new(TypeDescriptor::string());
                }
                self.union(alternatives, options, walk)
            }
            Expr::Group { expression } | Expr::LabeledExpression { expression, .. } => {
                self.infer(expression, options, walk)
            }
            Expr::Star { expression } | Expr::Plus { expression } => {
                self.array(expression, options, walk)
            }
            Expr::Optional { expression } => {
                let payload = self.infer(expression, options, walk);
                Rc::new(TypeDescriptor::optional_of(&payload, void))
            }
            Expr::Quantified {
                expression,
                min,
                max,
            } => match Quantifier::of(*min, *max) {
                Quantifier::Optional => {
                    let payload = self.infer(expression, options, walk);
                    Rc::new(TypeDescriptor::optional_of(&payload, void))
                }
                Quantifier::Single => self.infer(expression, options, walk),
                Quantifier::Array => self.array(expression, options, walk),
            },
            Expr::PositiveLookahead { .. } | Expr::NegativeLookahead { .. } => {
                Rc::new(TypeDescriptor::void(void))
            }
        }
    }

    fn array(
        &mut self,
        element: &Expr,
        options: TypeInferenceOptions,
        walk: &mut Walk,
    ) -> Rc<TypeDescriptor> {
        let element = self.infer(element, options, walk);
        if !options.infer_array_types {
            return element;
        }
        Rc::new(TypeDescriptor::array_of(&element))
    }

    /// Choice type. When every alternative renders alike the result is that
    /// member's descriptor, so its base type is the member's, not `Union`.
    fn union(
        &mut self,
        alternatives: &[Expr],
        options: TypeInferenceOptions,
        walk: &mut Walk,
    ) -> Rc<TypeDescriptor> {
        let members: Vec<_> = alternatives
            .iter()
            .map(|a| self.infer(a, options, walk))
            .collect();

        let mut rendered = IndexSet::new();
        for member in &members {
            rendered.insert(member.embedded());
        }

        match rendered.len() {
            0 => Rc::new(TypeDescriptor::never()),
            // All alternatives render alike: the union is that one member.
            1 => Rc::clone(&members[0]),
            _ => {
                let nullable = members.iter().any(|m| m.nullable);
                let rendered: Vec<String> = rendered.into_iter().collect();
                Rc::new(TypeDescriptor::union(&rendered, nullable))
            }
        }
    }

    fn resolve(
        &mut self,
        name: &str,
        options: TypeInferenceOptions,
        walk: &mut Walk,
    ) -> Rc<TypeDescriptor> {
        if let Some(start) = walk.visiting.iter().position(|n| n == name) {
            let mut cycle = walk.visiting[start..].to_vec();
            cycle.push(name.to_string());
            if !walk.cycles.iter().any(|c| same_cycle(c, &cycle)) {
                walk.cycles.push(cycle);
            }
            walk.tainted = true;
            return Rc::new(TypeDescriptor::unknown(circular_reference(name)));
        }

        let Some(rule) = self.rules.get(name) else {
            return Rc::new(TypeDescriptor::unknown(format!(
                "Reference to unknown rule `{name}`"
            )));
        };
        let pattern = Rc::clone(&rule.pattern);

        walk.visiting.push(name.to_string());
        let descriptor = self.infer(&pattern, options, walk);
        walk.visiting.pop();
        descriptor
    }
}

/// Types for every rule of `grammar`.
pub fn infer_grammar_types(
    grammar: &GrammarDefinition,
    options: TypeInferenceOptions,
) -> GrammarTypes {
    TypeInference::for_grammar(grammar, options).infer_grammar()
}

fn circular_reference(name: &str) -> String {
    format!("Circular reference to rule `{name}`")
}

/// Whether two closed cycles (`[a, b, a]`) are rotations of each other.
fn same_cycle(a: &[String], b: &[String]) -> bool {
    let (Some((_, a)), Some((_, b))) = (a.split_last(), b.split_last()) else {
        return a.is_empty() && b.is_empty();
    };
    if a.len() != b.len() {
        return false;
    }
    (0..a.len()).any(|shift| a.iter().cycle().skip(shift).zip(b).all(|(x, y)| x == y))
}
