use num::{BigUint, One};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

/// Number of Feistel rounds applied per permutation step.
pub const FEISTEL_ROUNDS: usize = 8;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// The splitmix64 finalizer.
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

const fn mask_u64(bits: u64) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

fn mask_big(bits: u64) -> BigUint {
    (BigUint::one() << bits) - 1u32
}

/// A keyed bijection on `[0, 2^bits)`.
///
/// The value is split into a high half of `ceil(bits / 2)` bits and a low half
/// of `floor(bits / 2)` bits. Each round replaces the state `(L, R)` by
/// `(R, L ^ F(k, R))`, truncating `F` to the width of `L`; the half widths
/// trade places every round, so odd bit widths remain a bijection.
///
/// Round keys are drawn once from a ChaCha8 stream seeded with the seed; no RNG
/// is kept afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeistelNetwork {
    bits: u64,
    high_bits: u64,
    low_bits: u64,
    keys: [u64; FEISTEL_ROUNDS],
    high_mask: BigUint,
    low_mask: BigUint,
}

impl FeistelNetwork {
    /// Creates a network permuting `bits`-bit values, keyed by `seed`.
    pub fn new(bits: u64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut keys = [0; FEISTEL_ROUNDS];
        for key in &mut keys {
            *key = rng.next_u64();
        }

        let low_bits = bits / 2;
        let high_bits = bits - low_bits;
        Self {
            bits,
            high_bits,
            low_bits,
            keys,
            high_mask: mask_big(high_bits),
            low_mask: mask_big(low_bits),
        }
    }

    /// Width of the permuted domain in bits.
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Permutes a value of at most 64 bits. Requires `self.bits() <= 64`.
    pub fn permute_u64(&self, value: u64) -> u64 {
        debug_assert!(self.bits <= 64);
        let (mut left_bits, mut right_bits) = (self.high_bits, self.low_bits);
        let mut left = value >> right_bits;
        let mut right = value & mask_u64(right_bits);

        for &key in &self.keys {
            let mixed = left ^ (mix64(right ^ key) & mask_u64(left_bits));
            left = right;
            right = mixed;
            (left_bits, right_bits) = (right_bits, left_bits);
        }

        (left << right_bits) | right
    }

    /// Permutes a value of any width.
    pub fn permute_big(&self, value: &BigUint) -> BigUint {
        let (mut left_bits, mut right_bits) = (self.high_bits, self.low_bits);
        let mut left: BigUint = value >> right_bits;
        let mut right: BigUint = value & self.mask(right_bits);

        for &key in &self.keys {
            let round = Self::round_big(key, &right, left_bits) & self.mask(left_bits);
            let mixed = left ^ round;
            left = right;
            right = mixed;
            (left_bits, right_bits) = (right_bits, left_bits);
        }

        (left << right_bits) | right
    }

    fn mask(&self, width: u64) -> &BigUint {
        if width == self.high_bits {
            &self.high_mask
        } else {
            &self.low_mask
        }
    }

    /// Keyed round function for wide halves: absorbs the half one word at a
    /// time, then expands the digest in counter mode to `out_bits` bits.
    fn round_big(key: u64, half: &BigUint, out_bits: u64) -> BigUint {
        let digest = half
            .iter_u64_digits()
            .fold(mix64(key), |acc, digit| mix64(acc ^ digit).wrapping_add(GOLDEN_GAMMA));

        let words = out_bits.div_ceil(64);
        let mut limbs = Vec::with_capacity(2 * words as usize);
        for counter in 0..words {
            let word = mix64(digest ^ mix64(key.wrapping_add(counter.wrapping_mul(GOLDEN_GAMMA))));
            limbs.push(word as u32);
            limbs.push((word >> 32) as u32);
        }
        BigUint::new(limbs)
    }
}
