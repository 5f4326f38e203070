use crate::{Ordinal, Result};

/// A deterministic bijection on `[0, count)`.
///
/// Implementations map every index of the domain to a distinct index of the
/// same domain, depend only on their configuration (typically a seed), and
/// use constant memory however large `count` is.
pub trait Shuffler<I: Ordinal> {
    /// The size of the permuted domain.
    fn count(&self) -> &I;

    /// Returns the position `index` is moved to.
    ///
    /// # Errors
    /// - [`crate::Error::IndexOutOfRange`] if `index >= count`.
    fn shuffled_index(&self, index: &I) -> Result<I>;
}

/// What to do when a shuffler is built without an explicit seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Draw a non-deterministic seed.
    #[default]
    AllowRandom,
    /// Refuse to build; the permutation must be reproducible.
    Deterministic,
}
