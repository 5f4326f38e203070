use core::fmt;
use core::hash::Hash;
use num::BigUint;

/// A trait for the integer types a traversal can be indexed by.
///
/// This abstracts over fixed-width scalars (`u32`, `u64`, `u128`) and the
/// arbitrary-precision [`BigUint`], so the same traversal and suppliers work
/// whether the domain fits a machine word or not.
///
/// Every operation here is only ever called with operands that keep the
/// result inside `[0, end]` of some valid range, so implementations never
/// need to handle overflow or underflow.
pub trait Ordinal:
    Clone + Ord + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human-readable name of the representation, used in error messages.
    const NAME: &'static str;

    /// The zero value (start of every generated domain).
    fn zero() -> Self;

    /// Advances this value by one.
    fn increment(&mut self);

    /// Returns `end - self`. Requires `self <= end`.
    fn distance(&self, end: &Self) -> Self;

    /// Returns `self + by`.
    fn offset(&self, by: &Self) -> Self;

    /// Returns `self / 2`, rounding down.
    fn half(&self) -> Self;

    /// Divides by a (non-zero) word-sized divisor, returning the quotient and
    /// remainder.
    fn div_rem_u64(&self, divisor: u64) -> (Self, u64);

    /// Number of significant bits (`0` for zero).
    fn bit_len(&self) -> u64;

    /// Converts to a `u64` if the value fits.
    fn to_u64(&self) -> Option<u64>;

    /// Converts from a `u64` if the value fits this representation.
    fn from_u64(value: u64) -> Option<Self>;

    /// Widens into a [`BigUint`].
    fn to_biguint(&self) -> BigUint;

    /// Narrows from a [`BigUint`] if the value fits this representation.
    fn from_biguint(value: &BigUint) -> Option<Self>;

    /// Converts to a `u64`, saturating at `u64::MAX`.
    fn saturating_u64(&self) -> u64 {
        self.to_u64().unwrap_or(u64::MAX)
    }
}
