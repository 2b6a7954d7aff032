//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! hidden where a command accepts but ignores it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar file in JSON form (positional, `-` for stdin).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Grammar file (JSON), or - for stdin")
}

/// Input file to parse (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file to parse, or - for stdin")
}

/// Inline input text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline input text")
}

/// Rule to start from (--entry).
pub fn entry_arg() -> Arg {
    Arg::new("entry")
        .long("entry")
        .value_name("RULE")
        .help("Rule to parse with (default: first rule)")
}

/// Accept a matching prefix (--partial).
pub fn partial_arg() -> Arg {
    Arg::new("partial")
        .long("partial")
        .action(ArgAction::SetTrue)
        .help("Succeed on a matching prefix instead of requiring all input")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Collapse repetitions to their element type (--no-arrays).
pub fn no_arrays_arg() -> Arg {
    Arg::new("no_arrays")
        .long("no-arrays")
        .action(ArgAction::SetTrue)
        .help("Type repetitions as their element type instead of T[]")
}

/// Type choices as plain `string` (--no-unions).
pub fn no_unions_arg() -> Arg {
    Arg::new("no_unions")
        .long("no-unions")
        .action(ArgAction::SetTrue)
        .help("Type choices as string instead of a union")
}

/// Type sequences as plain `string` (--no-tuples).
pub fn no_tuples_arg() -> Arg {
    Arg::new("no_tuples")
        .long("no-tuples")
        .action(ArgAction::SetTrue)
        .help("Type sequences as string instead of a tuple")
}

/// Spelling of the absent marker (--void-type).
pub fn void_type_arg() -> Arg {
    Arg::new("void_type")
        .long("void-type")
        .value_name("TYPE")
        .value_parser(["undefined", "null"])
        .help("Type for absent values: undefined (default) or null")
}
