//! Command builders for the CLI.
//!
//! `parse` and `trace` share one flag set. `infer` and `check` accept the
//! input flags too, hidden, so switching subcommands on a command line never
//! turns into a usage error.

use clap::Command;

use super::args::*;

/// Add hidden input args (for commands that don't parse input).
fn with_hidden_input_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg().hide(true))
        .arg(source_text_arg().hide(true))
        .arg(entry_arg().hide(true))
        .arg(partial_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Add hidden inference args (for commands that don't infer).
fn with_hidden_infer_args(cmd: Command) -> Command {
    cmd.arg(no_arrays_arg().hide(true))
        .arg(no_unions_arg().hide(true))
        .arg(no_tuples_arg().hide(true))
        .arg(void_type_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pegloom")
        .about("PEG grammars: parse input and infer result types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(infer_command())
        .subcommand(parse_command())
        .subcommand(trace_command())
}

/// Report grammar problems.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report grammar problems")
        .override_usage("  pegloom check <GRAMMAR> [--strict]")
        .after_help(
            r#"EXAMPLES:
  pegloom check grammar.json            # errors fail, warnings are printed
  pegloom check grammar.json --strict   # warnings fail too
  cat grammar.json | pegloom check -"#,
        )
        .arg(grammar_path_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_hidden_infer_args(with_hidden_input_args(cmd))
}

/// Print the inferred type of every rule.
pub fn infer_command() -> Command {
    let cmd = Command::new("infer")
        .about("Print the inferred type of every rule")
        .override_usage("  pegloom infer <GRAMMAR> [OPTIONS]")
        .after_help(
            r#"EXAMPLES:
  pegloom infer grammar.json
  pegloom infer grammar.json --no-unions --void-type null"#,
        )
        .arg(grammar_path_arg())
        .arg(no_arrays_arg())
        .arg(no_unions_arg())
        .arg(no_tuples_arg())
        .arg(void_type_arg())
        .arg(color_arg());

    with_hidden_input_args(cmd.arg(strict_arg().hide(true)))
}

/// Parse input with a grammar and print the result value.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse input and print the result as JSON")
        .override_usage(
            "\
  pegloom parse <GRAMMAR> <SOURCE>
  pegloom parse <GRAMMAR> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  pegloom parse grammar.json input.txt
  pegloom parse grammar.json -s '1+2' --entry sum
  pegloom parse grammar.json -s '1+2 rest' --partial --compact"#,
        );

    with_hidden_infer_args(with_run_args(cmd).arg(strict_arg().hide(true)))
}

/// Parse input and print every rule entry and exit.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace rule calls while parsing input")
        .override_usage(
            "\
  pegloom trace <GRAMMAR> <SOURCE>
  pegloom trace <GRAMMAR> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  pegloom trace grammar.json -s '1+2'
  pegloom trace grammar.json input.txt --entry sum --partial"#,
        );

    with_hidden_infer_args(with_run_args(cmd).arg(strict_arg().hide(true)))
}

fn with_run_args(cmd: Command) -> Command {
    cmd.arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(entry_arg())
        .arg(partial_arg())
        .arg(compact_arg())
        .arg(color_arg())
}
