//! Binary serialization for grammars using postcard.

use super::json::GrammarError;
use super::types::GrammarDefinition;
use crate::invariants::ensure_encoded;

impl GrammarDefinition {
    /// Deserialize a grammar from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        postcard::from_bytes(bytes).map_err(GrammarError::Binary)
    }

    /// Serialize to binary format.
    ///
    /// Unlike JSON, duplicate rule names survive the trip.
    pub fn to_binary(&self) -> Vec<u8> {
        ensure_encoded(postcard::to_allocvec(self))
    }
}
