use crate::Ordinal;
use num::{BigUint, Integer, ToPrimitive, Zero};

impl Ordinal for BigUint {
    const NAME: &'static str = "BigUint";

    fn zero() -> Self {
        Zero::zero()
    }

    fn increment(&mut self) {
        *self += 1u32;
    }

    fn distance(&self, end: &Self) -> Self {
        end - self
    }

    fn offset(&self, by: &Self) -> Self {
        self + by
    }

    fn half(&self) -> Self {
        self >> 1usize
    }

    fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
        let (quotient, remainder) = self.div_rem(&BigUint::from(divisor));
        // The remainder is below `divisor`, so it is at most one digit.
        (quotient, remainder.iter_u64_digits().next().unwrap_or(0))
    }

    fn bit_len(&self) -> u64 {
        self.bits()
    }

    fn to_u64(&self) -> Option<u64> {
        ToPrimitive::to_u64(self)
    }

    fn from_u64(value: u64) -> Option<Self> {
        Some(BigUint::from(value))
    }

    fn to_biguint(&self) -> BigUint {
        self.clone()
    }

    fn from_biguint(value: &BigUint) -> Option<Self> {
        Some(value.clone())
    }
}
