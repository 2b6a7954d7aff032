//! Trace rule calls while parsing.

use std::cell::RefCell;
use std::rc::Rc;

use pegloom_core::Colors;
use pegloom_runtime::PrintTracer;

use super::run_common::{self, RunInput, fail};

pub struct TraceArgs {
    pub input: RunInput,
}

pub fn run(args: TraceArgs) {
    let input = args.input;
    let prepared = run_common::prepare(&input).unwrap_or_else(|e| fail(e));

    let colors = Colors::new(input.color);
    let tracer = Rc::new(RefCell::new(PrintTracer::new(colors)));
    let result = prepared
        .grammar
        .parse_traced(
            &prepared.rule,
            &prepared.source,
            !input.partial,
            tracer.clone(),
        )
        .unwrap_or_else(|e| fail(e));

    tracer.borrow().print();
    println!();

    match result {
        Ok(success) => println!("{}", success.val.format(!input.compact, colors)),
        Err(error) => {
            run_common::report_parse_error(&error, &prepared, input.color);
            std::process::exit(1);
        }
    }
}
