use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::run_common::{InputError, RunInput, decode_grammar, load_source, prepare, read_text};

const GRAMMAR: &str = r#"{
  "name": "digits",
  "rules": {
    "number": { "pattern": { "type": "Plus", "expression": { "type": "Identifier", "name": "digit" } } },
    "digit": { "pattern": { "type": "CharacterClass", "ranges": [{ "start": "0", "end": "9" }] } }
  }
}"#;

#[test]
fn decodes_grammar() {
    let grammar = decode_grammar(Path::new("g.json"), GRAMMAR).unwrap();

    assert_eq!(grammar.name, "digits");
    assert_eq!(grammar.rule_names().collect::<Vec<_>>(), ["number", "digit"]);
}

#[test]
fn invalid_grammar_names_the_file() {
    let err = decode_grammar(Path::new("g.json"), "{").unwrap_err();

    assert!(matches!(err, InputError::Grammar { .. }));
    assert!(err.to_string().starts_with("invalid grammar 'g.json': JSON parse error"));
}

#[test]
fn inline_source_wins() {
    let (text, name) = load_source(Some("123"), Some(Path::new("in.txt")), Path::new("g.json"))
        .unwrap();

    assert_eq!(text, "123");
    assert_eq!(name, None);
}

#[test]
fn source_is_required() {
    let err = load_source(None, None, Path::new("g.json")).unwrap_err();

    insta::assert_snapshot!(err, @"input is required: use a SOURCE argument or -s/--source");
}

#[test]
fn stdin_only_once() {
    let err = load_source(None, Some(Path::new("-")), Path::new("-")).unwrap_err();

    assert!(matches!(err, InputError::DoubleStdin));
}

#[test]
fn missing_file() {
    let err = read_text(Path::new("/nonexistent/pegloom/input.txt")).unwrap_err();

    assert!(matches!(err, InputError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/pegloom/input.txt'"));
}

fn grammar_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(GRAMMAR.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn unknown_entry_is_rejected_before_reading_input() {
    let file = grammar_file();

    let input = RunInput {
        grammar_path: file.path().to_path_buf(),
        source_path: None,
        source_text: None,
        entry: Some("nope".to_string()),
        partial: false,
        compact: false,
        color: false,
    };
    let err = prepare(&input).err().map(|e| e.to_string());

    assert_eq!(err.as_deref(), Some("unknown rule `nope`"));
}

#[test]
fn prepares_entry_rule() {
    let file = grammar_file();

    let input = RunInput {
        grammar_path: file.path().to_path_buf(),
        source_path: None,
        source_text: Some("42".to_string()),
        entry: None,
        partial: false,
        compact: true,
        color: false,
    };
    let prepared = prepare(&input).unwrap();
    assert_eq!(prepared.rule, "number");
    let value = prepared
        .grammar
        .parse_complete(&prepared.rule, &prepared.source)
        .unwrap()
        .unwrap();
    assert_eq!(value.val.flatten_text(), "42");
}
