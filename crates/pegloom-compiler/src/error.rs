//! Errors raised while compiling or driving a grammar.
//!
//! Parse failures are not errors in this sense: they are `ParseError` values
//! inside a successful `Result`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two rules share a name, so references to it are ambiguous.
    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    /// The requested entry rule does not exist.
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    /// The grammar has no rules to start from.
    #[error("grammar `{0}` has no rules")]
    EmptyGrammar(String),
}

pub type Result<T> = std::result::Result<T, Error>;
