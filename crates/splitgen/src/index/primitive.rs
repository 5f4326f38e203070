use crate::Ordinal;
use num::BigUint;

macro_rules! impl_ordinal {
    ($($ty:ty),* $(,)?) => {$(
        impl Ordinal for $ty {
            const NAME: &'static str = stringify!($ty);

            fn zero() -> Self {
                0
            }

            fn increment(&mut self) {
                *self += 1;
            }

            fn distance(&self, end: &Self) -> Self {
                *end - *self
            }

            fn offset(&self, by: &Self) -> Self {
                *self + *by
            }

            fn half(&self) -> Self {
                *self / 2
            }

            fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
                // Widen so a divisor larger than `Self::MAX` is still exact.
                let value = *self as u128;
                let divisor = u128::from(divisor);
                ((value / divisor) as Self, (value % divisor) as u64)
            }

            fn bit_len(&self) -> u64 {
                u64::from(<$ty>::BITS - self.leading_zeros())
            }

            fn to_u64(&self) -> Option<u64> {
                u64::try_from(*self).ok()
            }

            fn from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn to_biguint(&self) -> BigUint {
                BigUint::from(*self)
            }

            fn from_biguint(value: &BigUint) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

impl_ordinal!(u32, u64, u128);
