//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ParseError;

#[track_caller]
pub(crate) fn failed_unwrap_value(error: &ParseError) -> ! {
    panic!("unwrap_value called on a failed parse: {error}")
}

#[track_caller]
pub(crate) fn ensure_encoded(result: Result<Vec<u8>, postcard::Error>) -> Vec<u8> {
    result.unwrap_or_else(|e| panic!("grammar serialization should not fail: {e}"))
}
