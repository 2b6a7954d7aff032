//! Structural type inference for grammar rules.
//!
//! Computes what each rule would produce when parsed, without parsing:
//! literals are literal types, sequences tuples, choices unions, repetitions
//! arrays. Unknown references and circular dependencies resolve to `unknown`
//! and are reported as data.

mod descriptor;
mod dump;
mod engine;
mod options;


pub use descriptor::{BaseType, TypeDescriptor};
pub use dump::GrammarTypes;
pub use engine::{TypeInference, infer_grammar_types};
pub use options::{TypeInferenceOptions, VoidType};
