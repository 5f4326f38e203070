use core::ops::Range;
use std::sync::Arc;

use num::BigUint;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, FeistelNetwork, IndexedSupplier, Ordinal, RandSource, Result, SeedPolicy, Shuffler,
    Splittable, ThreadRandom,
};

#[derive(Debug)]
struct Config<I> {
    count: I,
    seed: u64,
    limit: BigUint,
    // Set when the network domain fits in a word.
    word_limit: Option<u128>,
    network: FeistelNetwork,
}

/// A [`Shuffler`] backed by a [`FeistelNetwork`] with cycle-walking.
///
/// The network permutes the smallest power-of-two domain `2^k >= count`.
/// Outputs that land outside `[0, count)` are fed back into the network until
/// one lands inside; since the network is a bijection on `2^k` elements and
/// `2^k < 2 * count`, this restricts it to a bijection on `[0, count)` with
/// fewer than two extra rounds expected per lookup.
///
/// Domains of up to 64 bits use word arithmetic; wider domains fall back to
/// [`BigUint`].
///
/// The configuration is immutable and shared behind an [`Arc`], so splitting
/// is a cheap copy.
///
/// # Example
/// ```
/// use splitgen::{FeistelShuffler, Shuffler};
///
/// let shuffler = FeistelShuffler::from_seed(10u64, 42);
/// let mut seen: Vec<u64> = (0..10).map(|i| shuffler.shuffled_index(&i).unwrap()).collect();
/// seen.sort_unstable();
/// assert_eq!(seen, (0..10).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct FeistelShuffler<I> {
    config: Arc<Config<I>>,
}

impl<I: Ordinal> FeistelShuffler<I> {
    /// Creates a shuffler over `[0, count)` with a non-deterministic seed.
    pub fn new(count: I) -> Self {
        Self::with_rand(count, &ThreadRandom)
    }

    /// Creates a shuffler over `[0, count)` seeded from `rng`.
    pub fn with_rand<R: RandSource<u64>>(count: I, rng: &R) -> Self {
        Self::from_seed(count, rng.rand())
    }

    /// Creates a shuffler over `[0, count)` with a fixed seed.
    ///
    /// The same `(count, seed)` always yields the same permutation.
    #[cfg_attr(feature = "tracing", instrument(level = "debug"))]
    pub fn from_seed(count: I, seed: u64) -> Self {
        let limit = count.to_biguint();
        let bits = if limit <= BigUint::from(1u32) {
            0
        } else {
            (&limit - 1u32).bits()
        };
        let word_limit = if bits <= 64 {
            <u128 as Ordinal>::from_biguint(&limit)
        } else {
            None
        };
        Self {
            config: Arc::new(Config {
                count,
                seed,
                limit,
                word_limit,
                network: FeistelNetwork::new(bits, seed),
            }),
        }
    }

    /// Creates a shuffler from an optional seed, following `policy` when it
    /// is absent.
    ///
    /// # Errors
    /// - [`Error::MissingSeed`] if `seed` is `None` and `policy` is
    ///   [`SeedPolicy::Deterministic`].
    pub fn resolve(count: I, seed: Option<u64>, policy: SeedPolicy) -> Result<Self> {
        match (seed, policy) {
            (Some(seed), _) => Ok(Self::from_seed(count, seed)),
            (None, SeedPolicy::AllowRandom) => Ok(Self::new(count)),
            (None, SeedPolicy::Deterministic) => Err(Error::MissingSeed),
        }
    }

    /// Returns a shuffler over the same domain keyed by `seed`.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self::from_seed(self.config.count.clone(), seed)
    }

    /// The size of the permuted domain.
    pub fn count(&self) -> &I {
        &self.config.count
    }

    /// The seed the permutation is keyed by.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Width in bits of the power-of-two domain the network permutes.
    pub fn bits(&self) -> u64 {
        self.config.network.bits()
    }

    /// Returns the position `index` is moved to.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= count`.
    pub fn shuffled_index(&self, index: &I) -> Result<I> {
        if *index >= self.config.count {
            return Err(Error::IndexOutOfRange {
                index: index.to_string(),
                count: self.config.count.to_string(),
            });
        }
        Ok(self.permute(index))
    }

    // Requires `index < count`: the walk only terminates on cycles that
    // contain an in-range element.
    pub(crate) fn permute(&self, index: &I) -> I {
        let config = &*self.config;
        debug_assert!(*index < config.count, "{index} is outside [0, {})", config.count);
        match config.word_limit {
            Some(limit) => {
                let mut value = index
                    .to_u64()
                    .expect("an index below the count fits in the network width");
                loop {
                    value = config.network.permute_u64(value);
                    if u128::from(value) < limit {
                        break;
                    }
                }
                I::from_u64(value).expect("a shuffled index stays below the count")
            }
            None => {
                let mut value = index.to_biguint();
                loop {
                    value = config.network.permute_big(&value);
                    if value < config.limit {
                        break;
                    }
                }
                I::from_biguint(&value).expect("a shuffled index stays below the count")
            }
        }
    }
}

impl<I: Ordinal> Shuffler<I> for FeistelShuffler<I> {
    fn count(&self) -> &I {
        self.count()
    }

    fn shuffled_index(&self, index: &I) -> Result<I> {
        self.shuffled_index(index)
    }
}

impl<I> Splittable for FeistelShuffler<I> {
    fn split(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}

impl<I: Ordinal> IndexedSupplier<I> for FeistelShuffler<I> {
    type Output = I;

    fn apply(&mut self, index: &I) -> I {
        self.permute(index)
    }

    fn domain(&self) -> Option<Range<I>> {
        Some(I::zero()..self.config.count.clone())
    }
}
