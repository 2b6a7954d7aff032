//! Output shape of bounded repetition.
//!
//! Compilation and type inference both go through [`Quantifier::of`] so a
//! `Quantified` node produces exactly the value its inferred type describes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Quantifier {
    /// `{0,1}`: the inner value or the absent marker.
    Optional,
    /// `{1,1}`: exactly the inner value.
    Single,
    /// Anything else: an array of inner values.
    Array,
}

impl Quantifier {
    pub(crate) fn of(min: u32, max: Option<u32>) -> Self {
        match (min, max) {
            (0, Some(1)) => Self::Optional,
            (1, Some(1)) => Self::Single,
            _ => Self::Array,
        }
    }
}
