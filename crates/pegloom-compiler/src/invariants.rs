//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

#[track_caller]
pub(crate) fn ensure_cache_key(result: Result<Vec<u8>, postcard::Error>) -> Vec<u8> {
    result.unwrap_or_else(|e| panic!("expression should always encode as a cache key: {e}"))
}
