//! Left-recursion detection.
//!
//! A rule that can reach itself without consuming input recurses forever at
//! parse time. Edges of the "called at the same position" graph are collected
//! per rule, then strongly connected components are found with Tarjan's
//! algorithm.

use indexmap::{IndexMap, IndexSet};
use pegloom_core::grammar::{Expr, GrammarDefinition};

use super::nullable::Nullability;

/// Cycles of left-recursive rules, each closed (`[a, b, a]`).
pub fn find_left_recursion(grammar: &GrammarDefinition) -> Vec<Vec<String>> {
    let mut nullability = Nullability::new(grammar);
    let mut graph: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    for rule in &grammar.rules {
        if graph.contains_key(rule.name.as_str()) {
            continue;
        }
        let mut edges = IndexSet::new();
        leftmost_refs(&rule.pattern, &mut nullability, &mut edges);
        graph.insert(rule.name.as_str(), edges);
    }

    find_sccs(&graph)
        .into_iter()
        .filter(|scc| {
            let head = scc[0].as_str();
            scc.len() > 1 || graph.get(head).is_some_and(|edges| edges.contains(head))
        })
        .map(|mut scc| {
            // Tarjan pops in reverse discovery order.
            scc.reverse();
            let first = scc[0].clone();
            scc.push(first);
            scc
        })
        .collect()
}

/// Rules that may be invoked at the position where `expr` starts.
fn leftmost_refs<'g>(
    expr: &'g Expr,
    nullability: &mut Nullability<'g>,
    out: &mut IndexSet<&'g str>,
) {
    match expr {
        Expr::StringLiteral { .. } | Expr::CharacterClass { .. } | Expr::AnyChar => {}
        Expr::Identifier { name } => {
            out.insert(name.as_str());
        }
        Expr::Sequence { elements } => {
            for element in elements {
                leftmost_refs(element, nullability, out);
                if !nullability.can_match_empty(element) {
                    break;
                }
            }
        }
        Expr::Choice { alternatives } => {
            for alternative in alternatives {
                leftmost_refs(alternative, nullability, out);
            }
        }
        Expr::Group { expression }
        | Expr::Star { expression }
        | Expr::Plus { expression }
        | Expr::Optional { expression }
        | Expr::Quantified { expression, .. }
        | Expr::PositiveLookahead { expression }
        | Expr::NegativeLookahead { expression }
        | Expr::LabeledExpression { expression, .. } => {
            leftmost_refs(expression, nullability, out);
        }
    }
}

fn find_sccs(graph: &IndexMap<&str, IndexSet<&str>>) -> Vec<Vec<String>> {
    struct State<'a> {
        graph: &'a IndexMap<&'a str, IndexSet<&'a str>>,
        index: usize,
        stack: Vec<&'a str>,
        on_stack: IndexSet<&'a str>,
        indices: IndexMap<&'a str, usize>,
        lowlinks: IndexMap<&'a str, usize>,
        sccs: Vec<Vec<String>>,
    }

    fn strongconnect<'a>(name: &'a str, state: &mut State<'a>) {
        state.indices.insert(name, state.index);
        state.lowlinks.insert(name, state.index);
        state.index += 1;
        state.stack.push(name);
        state.on_stack.insert(name);

        let graph = state.graph;
        if let Some(edges) = graph.get(name) {
            for &target in edges {
                if !graph.contains_key(target) {
                    continue;
                }
                let candidate = if !state.indices.contains_key(target) {
                    strongconnect(target, state);
                    state.lowlinks.get(target).copied()
                } else if state.on_stack.contains(target) {
                    state.indices.get(target).copied()
                } else {
                    None
                };
                if let (Some(candidate), Some(low)) = (candidate, state.lowlinks.get_mut(name)) {
                    *low = (*low).min(candidate);
                }
            }
        }

        if state.lowlinks.get(name) == state.indices.get(name) {
            let mut scc = Vec::new();
            while let Some(w) = state.stack.pop() {
                state.on_stack.swap_remove(w);
                scc.push(w.to_string());
                if w == name {
                    break;
                }
            }
            state.sccs.push(scc);
        }
    }

    let mut state = State {
        graph,
        index: 0,
        stack: Vec::new(),
        on_stack: IndexSet::new(),
        indices: IndexMap::new(),
        lowlinks: IndexMap::new(),
        sccs: Vec::new(),
    };

    for &name in graph.keys() {
        if !state.indices.contains_key(name) {
            strongconnect(name, &mut state);
        }
    }

    state.sccs
}
