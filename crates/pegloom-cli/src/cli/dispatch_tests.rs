//! Tests for CLI dispatch logic: hidden flags are accepted, hidden flags
//! stay out of `--help`, and params carry the right fields.

use std::path::PathBuf;

use pegloom_compiler::{TypeInferenceOptions, VoidType};

use super::dispatch::RunParams;
use super::*;
use crate::cli::commands::{check_command, infer_command, parse_command, trace_command};
use crate::commands::infer::InferArgs;
use crate::commands::run_common::RunInput;

#[test]
fn parse_extracts_run_params() {
    let m = parse_command()
        .try_get_matches_from([
            "parse",
            "g.json",
            "in.txt",
            "--entry",
            "sum",
            "--partial",
            "--compact",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.0.grammar_path, PathBuf::from("g.json"));
    assert_eq!(params.0.source_path, Some(PathBuf::from("in.txt")));
    assert_eq!(params.0.entry.as_deref(), Some("sum"));
    assert!(params.0.partial);
    assert!(params.0.compact);
    assert_eq!(params.0.color, ColorChoice::Never);
}

#[test]
fn parse_accepts_inline_source() {
    let m = parse_command()
        .try_get_matches_from(["parse", "g.json", "-s", "1+2"])
        .unwrap();
    let input: RunInput = RunParams::from_matches(&m).into();

    assert_eq!(input.source_text.as_deref(), Some("1+2"));
    assert_eq!(input.source_path, None);
    assert!(!input.partial);
}

#[test]
fn source_path_and_text_conflict() {
    let result = parse_command().try_get_matches_from(["parse", "g.json", "in.txt", "-s", "x"]);

    assert!(result.is_err());
}

#[test]
fn trace_shares_parse_flags() {
    let m = trace_command()
        .try_get_matches_from(["trace", "g.json", "-s", "x", "--partial"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert!(params.0.partial);
    assert_eq!(params.0.source_text.as_deref(), Some("x"));
}

#[test]
fn infer_maps_flags_to_options() {
    let m = infer_command()
        .try_get_matches_from([
            "infer",
            "g.json",
            "--no-arrays",
            "--no-tuples",
            "--void-type",
            "null",
        ])
        .unwrap();
    let args: InferArgs = InferParams::from_matches(&m).into();

    let expected = TypeInferenceOptions::new()
        .infer_array_types(false)
        .infer_object_types(false)
        .void_type(VoidType::Null);
    assert_eq!(args.options, expected);
}

#[test]
fn infer_defaults() {
    let m = infer_command()
        .try_get_matches_from(["infer", "g.json"])
        .unwrap();
    let args: InferArgs = InferParams::from_matches(&m).into();

    assert_eq!(args.options, TypeInferenceOptions::default());
}

#[test]
fn infer_rejects_unknown_void_type() {
    let result = infer_command().try_get_matches_from(["infer", "g.json", "--void-type", "nil"]);

    assert!(result.is_err());
}

#[test]
fn infer_accepts_hidden_input_flags() {
    let result = infer_command().try_get_matches_from([
        "infer", "g.json", "in.txt", "--entry", "sum", "--strict",
    ]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn check_accepts_hidden_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "g.json", "--strict", "--no-unions", "-s", "x"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(params.strict);
    assert_eq!(params.grammar_path, PathBuf::from("g.json"));
}

#[test]
fn grammar_is_required() {
    assert!(check_command().try_get_matches_from(["check"]).is_err());
}

#[test]
fn hidden_flags_stay_out_of_help() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--strict"));
    assert!(!help.contains("--entry"));
    assert!(!help.contains("--no-arrays"));
}

#[test]
fn infer_help_describes_string_collapse() {
    let help = infer_command().render_help().to_string();

    assert!(help.contains("Type choices as string instead of a union"));
    assert!(help.contains("Type sequences as string instead of a tuple"));
    assert!(!help.contains("unknown"));
}

#[test]
fn parse_help_hides_inference_flags() {
    let help = parse_command().render_help().to_string();

    assert!(help.contains("--partial"));
    assert!(!help.contains("--void-type"));
}

#[test]
fn color_choice() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
    assert_eq!(ColorChoice::default(), ColorChoice::Auto);
}

#[test]
fn cli_has_every_subcommand() {
    let cli = build_cli();
    let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();

    assert_eq!(names, ["check", "infer", "parse", "trace"]);
}
