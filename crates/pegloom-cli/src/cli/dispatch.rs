//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs pull the fields a command uses (ignoring hidden ones),
//! and `From<*Params>` impls bridge to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;
use pegloom_compiler::{TypeInferenceOptions, VoidType};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::infer::InferArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::run_common::RunInput;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InferParams {
    pub grammar_path: PathBuf,
    pub no_arrays: bool,
    pub no_unions: bool,
    pub no_tuples: bool,
    pub void_type: VoidType,
    pub color: ColorChoice,
}

impl InferParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let void_type = match m.get_one::<String>("void_type").map(|s| s.as_str()) {
            Some("null") => VoidType::Null,
            _ => VoidType::Undefined,
        };
        Self {
            grammar_path: grammar_path(m),
            no_arrays: m.get_flag("no_arrays"),
            no_unions: m.get_flag("no_unions"),
            no_tuples: m.get_flag("no_tuples"),
            void_type,
            color: parse_color(m),
        }
    }
}

impl From<InferParams> for InferArgs {
    fn from(p: InferParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            options: TypeInferenceOptions::new()
                .infer_array_types(!p.no_arrays)
                .infer_union_types(!p.no_unions)
                .infer_object_types(!p.no_tuples)
                .void_type(p.void_type),
            color: p.color.should_colorize(),
        }
    }
}

/// Inputs shared by `parse` and `trace`.
pub struct RunParams {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Option<String>,
    pub partial: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            entry: m.get_one::<String>("entry").cloned(),
            partial: m.get_flag("partial"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunInput {
    fn from(p: RunParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            source_path: p.source_path,
            source_text: p.source_text,
            entry: p.entry,
            partial: p.partial,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParseParams(pub RunParams);

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self(RunParams::from_matches(m))
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self { input: p.0.into() }
    }
}

pub struct TraceParams(pub RunParams);

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self(RunParams::from_matches(m))
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self { input: p.0.into() }
    }
}

fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
