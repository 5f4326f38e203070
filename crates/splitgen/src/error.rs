//! Error types for stream construction.
//!
//! Every failure in `splitgen` is synchronous and happens while a generator is
//! being built. Once a traversal exists it never fails: producing a value for
//! an in-range index is pure arithmetic.
//!
//! ## Error Cases
//! - `NegativeDimension`: a cartesian product was given a negative size.
//! - `CountOverflow`: the product cardinality does not fit the chosen index
//!   representation.
//! - `InvalidRange`: a traversal was requested over `[start, end)` with
//!   `start > end`.
//! - `IndexOutOfRange`: a checked lookup was given an index `>= count`.
//! - `OutOfDomain`: a traversal range reaches indices its supplier is not
//!   defined on.
//! - `MissingSeed`: a deterministic seed was required but none was supplied.

use num::BigUint;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `splitgen` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A dimension of a cartesian product was negative.
    #[error("invalid dimensions {dimensions:?}: dimension {position} is negative")]
    NegativeDimension {
        dimensions: Vec<i64>,
        position: usize,
    },

    /// The number of elements exceeds the largest value of the index type.
    ///
    /// Use a `BigUint`-indexed generator for domains of this size.
    #[error("count {count} does not fit in {repr}; use a BigUint-indexed generator instead")]
    CountOverflow { repr: &'static str, count: BigUint },

    /// A range was constructed with its start past its end.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: String, end: String },

    /// A checked lookup was given an index outside `[0, count)`.
    #[error("index {index} is out of range for count {count}")]
    IndexOutOfRange { index: String, count: String },

    /// A traversal range is not contained in its supplier's domain.
    #[error("range [{start}, {end}) is outside the supplier domain [{domain_start}, {domain_end})")]
    OutOfDomain {
        start: String,
        end: String,
        domain_start: String,
        domain_end: String,
    },
    /// Determinism was required but no seed was configured.
    #[error("a deterministic seed is required but none was provided")]
    MissingSeed,
}
