//! Construction errors.
//!
//! Domain operations are total and never fail. The only fallible entry point
//! is the validated constructor, which rejects bound pairs that would silently
//! masquerade as a malformed interval.

use thiserror::Error;

/// Error returned by `Interval::new` and `Interval::range`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// Lower bound is greater than the upper bound.
    ///
    /// The empty interval is only available through `Interval::empty()`.
    #[error("inverted interval bounds: lower {lower} is greater than upper {upper}")]
    InvertedBounds {
        /// Rendered lower bound
        lower: String,
        /// Rendered upper bound
        upper: String,
    },
}

impl IntervalError {
    /// Create an inverted-bounds error from anything displayable.
    pub fn inverted(lower: impl std::fmt::Display, upper: impl std::fmt::Display) -> Self {
        IntervalError::InvertedBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }
}
