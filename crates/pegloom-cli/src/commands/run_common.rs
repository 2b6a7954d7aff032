//! Shared logic for all commands: loading grammars and input, reporting
//! failures.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use pegloom_compiler::{CompiledGrammar, ErrorPrinter, compile};
use pegloom_core::ParseError;
use pegloom_core::grammar::{GrammarDefinition, GrammarError};

/// Why a command could not get started.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("invalid grammar '{}': {source}", path.display())]
    Grammar { path: PathBuf, source: GrammarError },
    #[error("input is required: use a SOURCE argument or -s/--source")]
    MissingSource,
    #[error("grammar and input cannot both be read from stdin")]
    DoubleStdin,
    #[error(transparent)]
    Compile(#[from] pegloom_compiler::Error),
}

/// Inputs of `parse` and `trace`.
pub struct RunInput {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Option<String>,
    pub partial: bool,
    pub compact: bool,
    pub color: bool,
}

/// A compiled grammar together with the input it runs on.
pub struct Prepared {
    pub grammar: CompiledGrammar,
    pub rule: String,
    pub source: String,
    /// Display name of the input for diagnostics.
    pub source_name: Option<String>,
}

/// Print `error: <e>` and exit with status 1.
pub fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub fn read_text(path: &Path) -> Result<String, InputError> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a grammar from its JSON text.
pub fn decode_grammar(path: &Path, text: &str) -> Result<GrammarDefinition, InputError> {
    GrammarDefinition::from_json(text).map_err(|source| InputError::Grammar {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_grammar(path: &Path) -> Result<GrammarDefinition, InputError> {
    let text = read_text(path)?;
    decode_grammar(path, &text)
}

/// Pick the input text: inline text first, then the SOURCE file.
pub fn load_source(
    source_text: Option<&str>,
    source_path: Option<&Path>,
    grammar_path: &Path,
) -> Result<(String, Option<String>), InputError> {
    if let Some(text) = source_text {
        return Ok((text.to_owned(), None));
    }
    let Some(path) = source_path else {
        return Err(InputError::MissingSource);
    };
    if is_stdin(path) && is_stdin(grammar_path) {
        return Err(InputError::DoubleStdin);
    }
    let name = (!is_stdin(path)).then(|| path.display().to_string());
    Ok((read_text(path)?, name))
}

pub fn prepare(input: &RunInput) -> Result<Prepared, InputError> {
    let definition = load_grammar(&input.grammar_path)?;
    let grammar = compile(&definition)?;
    for name in grammar.undefined_references() {
        eprintln!("warning: reference to unknown rule `{name}`");
    }

    let rule = match &input.entry {
        Some(entry) => entry.clone(),
        None => grammar
            .entry_rule()
            .map(str::to_string)
            .ok_or_else(|| pegloom_compiler::Error::EmptyGrammar(grammar.name().to_string()))?,
    };
    if grammar.parser(&rule).is_none() {
        return Err(pegloom_compiler::Error::UnknownRule(rule).into());
    }

    let (source, source_name) = load_source(
        input.source_text.as_deref(),
        input.source_path.as_deref(),
        &input.grammar_path,
    )?;

    Ok(Prepared {
        grammar,
        rule,
        source,
        source_name,
    })
}

/// Render a parse failure against its input on stderr.
pub fn report_parse_error(error: &ParseError, prepared: &Prepared, color: bool) {
    let mut printer = ErrorPrinter::new(error)
        .source(&prepared.source)
        .colored(color);
    if let Some(name) = &prepared.source_name {
        printer = printer.path(name);
    }
    eprintln!("{}", printer.render());
}
