pub mod check;
pub mod infer;
pub mod parse;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod run_common_tests;
