use pegloom_core::{ParseError, Pos};

use crate::{ErrorPrinter, ParseErrorPrinter};

#[test]
fn points_at_failure_offset() {
    let error = ParseError::new("boom", Pos::new(6, 6, 1));

    let result = error.printer().source("hello world").render();

    insta::assert_snapshot!(result, @r"
    error: boom
      |
    1 | hello world
      |       ^
    ");
}

#[test]
fn with_path() {
    let error = ParseError::new("boom", Pos::new(2, 2, 1));

    let result = ErrorPrinter::new(&error)
        .source("hello")
        .path("input.txt")
        .render();

    insta::assert_snapshot!(result, @r"
    error: boom
     --> input.txt:1:3
      |
    1 | hello
      |   ^
    ");
}

#[test]
fn second_line() {
    let error = ParseError::new("boom", Pos::new(4, 1, 2));

    let result = error.printer().source("ab\ncd").path("in").render();

    assert!(result.contains(" --> in:2:2"), "{result}");
    assert!(result.contains("2 | cd"), "{result}");
}

#[test]
fn label_and_notes() {
    let error = ParseError::new(r#"Expected "b""#, Pos::new(1, 1, 1))
        .with_expected("b")
        .with_found("x")
        .with_parser_name("pair")
        .with_context("in sequence");

    let result = error.printer().source("ax").render();

    assert!(result.starts_with(r#"error: Expected "b" (in `pair`)"#), "{result}");
    assert!(result.contains("expected b, found x"), "{result}");
    assert!(result.ends_with("  = note: in sequence"), "{result}");
}

#[test]
fn failure_at_end_of_input() {
    let error = ParseError::new("Unexpected end of input", Pos::new(2, 2, 1))
        .with_expected_all(["a", "b"])
        .with_found("end of input");

    let result = error.printer().source("ab").render();

    assert!(result.contains("1 | ab"), "{result}");
    assert!(
        result.contains("expected one of a, b, found end of input"),
        "{result}"
    );
}

#[test]
fn plain_without_source() {
    let error = ParseError::new("boom", Pos::new(3, 1, 2)).with_found("z");

    insta::assert_snapshot!(error.printer().render(), @r"
    error: boom at 2:1
      = found z
    ");
}

#[test]
fn colored() {
    let error = ParseError::new("boom", Pos::START);

    let result = error.printer().source("x").colored(true).render();

    assert!(result.contains("boom"));
    assert!(result.contains('\x1b'));
}
