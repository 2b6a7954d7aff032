use std::path::PathBuf;

use pegloom_compiler::{TypeInferenceOptions, infer_grammar_types};
use pegloom_core::Colors;
use pegloom_core::grammar::GrammarDefinition;

use super::run_common::{fail, load_grammar};

pub struct InferArgs {
    pub grammar_path: PathBuf,
    pub options: TypeInferenceOptions,
    pub color: bool,
}

pub fn run(args: InferArgs) {
    let grammar = load_grammar(&args.grammar_path).unwrap_or_else(|e| fail(e));
    print!("{}", render(&grammar, args.options, Colors::new(args.color)));
}

pub(crate) fn render(
    grammar: &GrammarDefinition,
    options: TypeInferenceOptions,
    colors: Colors,
) -> String {
    infer_grammar_types(grammar, options).dump(colors)
}
