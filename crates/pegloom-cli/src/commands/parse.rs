//! Parse input and print the resulting value.

use pegloom_core::Colors;

use super::run_common::{self, RunInput, fail};

pub struct ParseArgs {
    pub input: RunInput,
}

pub fn run(args: ParseArgs) {
    let input = args.input;
    let prepared = run_common::prepare(&input).unwrap_or_else(|e| fail(e));

    let result = if input.partial {
        prepared.grammar.parse(&prepared.rule, &prepared.source)
    } else {
        prepared.grammar.parse_complete(&prepared.rule, &prepared.source)
    }
    .unwrap_or_else(|e| fail(e));

    match result {
        Ok(success) => {
            let colors = Colors::new(input.color);
            println!("{}", success.val.format(!input.compact, colors));
            eprintln!(
                "{}",
                colors.paint(
                    colors.muted,
                    format_args!("matched {}..{}", success.current, success.next)
                )
            );
        }
        Err(error) => {
            run_common::report_parse_error(&error, &prepared, input.color);
            std::process::exit(1);
        }
    }
}
