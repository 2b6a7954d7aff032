use std::path::PathBuf;

use pegloom_compiler::{GrammarIssue, Severity, check_grammar};
use pegloom_core::Colors;

use super::run_common::{fail, load_grammar};

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let grammar = load_grammar(&args.grammar_path).unwrap_or_else(|e| fail(e));
    let issues = check_grammar(&grammar);

    let colors = Colors::new(args.color);
    for issue in &issues {
        eprintln!("{}", render_issue(issue, colors));
    }

    if is_failure(&issues, args.strict) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub(crate) fn render_issue(issue: &GrammarIssue, colors: Colors) -> String {
    let color = match issue.severity {
        Severity::Error => colors.failure,
        Severity::Warning => colors.rule,
    };
    let rule = issue
        .rule
        .as_deref()
        .map(|r| format!("[{r}]"))
        .unwrap_or_default();
    format!(
        "{}{rule}: {}",
        colors.paint(color, issue.severity),
        issue.message
    )
}

pub(crate) fn is_failure(issues: &[GrammarIssue], strict: bool) -> bool {
    issues.iter().any(|i| strict || i.is_error())
}
