#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Characteristics, FeistelShuffler, IndexedTraversal, Ordinal, Result, SeedPolicy};

/// A lazy stream of the indices `[0, count)` in shuffled order.
///
/// # Example
/// ```
/// use splitgen::ShuffledRange;
///
/// let first: Vec<u64> = ShuffledRange::<u64>::seeded(10, 42).collect();
/// let again: Vec<u64> = ShuffledRange::<u64>::seeded(10, 42).collect();
/// assert_eq!(first, again);
///
/// let mut sorted = first.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>());
/// ```
pub type ShuffledRange<I = u64> = IndexedTraversal<I, FeistelShuffler<I>>;

impl<I: Ordinal> IndexedTraversal<I, FeistelShuffler<I>> {
    /// Shuffles `[0, count)` with a non-deterministic seed.
    pub fn from_count(count: I) -> Self {
        Self::from_shuffler(FeistelShuffler::new(count))
    }

    /// Shuffles `[0, count)` with the permutation keyed by `seed`.
    pub fn seeded(count: I, seed: u64) -> Self {
        Self::from_shuffler(FeistelShuffler::from_seed(count, seed))
    }

    /// Shuffles `[0, count)` with an optional seed, following `policy` when it
    /// is absent.
    ///
    /// # Errors
    /// - [`crate::Error::MissingSeed`] if `seed` is `None` and `policy` is
    ///   [`SeedPolicy::Deterministic`].
    #[cfg_attr(feature = "tracing", instrument(level = "debug"))]
    pub fn resolve(count: I, seed: Option<u64>, policy: SeedPolicy) -> Result<Self> {
        FeistelShuffler::resolve(count, seed, policy).map(Self::from_shuffler)
    }

    /// Streams every index of `shuffler`'s domain in shuffled order.
    pub fn from_shuffler(shuffler: FeistelShuffler<I>) -> Self {
        Self::counted(shuffler.count().clone(), shuffler)
            .with_additional_characteristics(Characteristics::DISTINCT)
    }

    /// Re-keys the permutation with `seed`, keeping the remaining range.
    ///
    /// Intended to be called before the first value is pulled.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        let (start, end, shuffler, characteristics, split_threshold) = self.into_parts();
        Self::from_parts(
            start,
            end,
            shuffler.with_seed(seed),
            characteristics,
            split_threshold,
        )
    }

    /// The seed the permutation is keyed by.
    pub fn seed(&self) -> u64 {
        self.supplier().seed()
    }
}
