use core::mem;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Characteristics, Error, Identity, IndexedSupplier, Ordinal, Result};

/// Smallest remaining size at which [`IndexedTraversal::try_split`] will still
/// split. Ranges of one element are never divided.
pub const DEFAULT_SPLIT_THRESHOLD: u64 = 2;

const BASE_CHARACTERISTICS: Characteristics =
    Characteristics::ORDERED.union(Characteristics::IMMUTABLE);

/// A lazy, splittable traversal of the half-open index range `[start, end)`.
///
/// Each index is mapped to a value by the supplier `S` as it is visited; the
/// domain itself is never materialized. Sequential consumption goes through
/// [`Iterator`] (or [`Self::try_advance`]); parallel consumption bisects the
/// range with [`Self::try_split`], which also splits the supplier so that each
/// half owns an independent copy.
///
/// With the `rayon` feature, [`rayon::iter::IntoParallelIterator`] is
/// implemented on top of `try_split`.
///
/// ## Ordering
/// Indices are visited in ascending order. After a split, every index of the
/// returned (lower) half is smaller than every index left in `self`, so
/// concatenating results in split order reproduces the sequential order.
///
/// # Example
/// ```
/// use splitgen::IndexedTraversal;
///
/// let mut upper = IndexedTraversal::range(0u64, 8).unwrap();
/// let lower = upper.try_split().unwrap();
///
/// assert_eq!(lower.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(upper.collect::<Vec<_>>(), vec![4, 5, 6, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct IndexedTraversal<I, S> {
    start: I,
    end: I,
    supplier: S,
    characteristics: Characteristics,
    split_threshold: u64,
}

impl<I: Ordinal> IndexedTraversal<I, Identity> {
    /// Creates a traversal yielding the indices of `[start, end)` themselves.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] if `start > end`.
    pub fn range(start: I, end: I) -> Result<Self> {
        Ok(Self::new(start, end, Identity)?
            .with_additional_characteristics(Characteristics::DISTINCT | Characteristics::SORTED))
    }
}

impl<I, S> IndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I>,
{
    /// Creates a traversal over `[start, end)` applying `supplier` per index.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] if `start > end`.
    /// - [`Error::OutOfDomain`] if `[start, end)` is not inside
    ///   [`IndexedSupplier::domain`].
    pub fn new(start: I, end: I, supplier: S) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if let Some(domain) = supplier.domain() {
            // An empty range visits nothing, wherever it sits.
            if start < end && (start < domain.start || end > domain.end) {
                return Err(Error::OutOfDomain {
                    start: start.to_string(),
                    end: end.to_string(),
                    domain_start: domain.start.to_string(),
                    domain_end: domain.end.to_string(),
                });
            }
        }
        Ok(Self {
            start,
            end,
            supplier,
            characteristics: BASE_CHARACTERISTICS,
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
        })
    }

    /// Creates a traversal over `[0, count)`, which is always a valid range.
    pub(crate) fn counted(count: I, supplier: S) -> Self {
        Self::from_parts(
            I::zero(),
            count,
            supplier,
            BASE_CHARACTERISTICS,
            DEFAULT_SPLIT_THRESHOLD,
        )
    }

    /// Adds `characteristics` to the set reported by
    /// [`Self::characteristics`].
    #[must_use]
    pub fn with_additional_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics |= characteristics;
        self
    }

    /// Sets the minimum remaining size a traversal must have to be split.
    ///
    /// Values below [`DEFAULT_SPLIT_THRESHOLD`] are raised to it.
    #[must_use]
    pub fn with_split_threshold(mut self, threshold: u64) -> Self {
        self.split_threshold = threshold.max(DEFAULT_SPLIT_THRESHOLD);
        self
    }

    /// The next index to be visited.
    pub const fn start(&self) -> &I {
        &self.start
    }

    /// One past the last index to be visited.
    pub const fn end(&self) -> &I {
        &self.end
    }

    /// The minimum split granularity.
    pub const fn split_threshold(&self) -> u64 {
        self.split_threshold
    }

    /// The supplier used to compute values.
    pub const fn supplier(&self) -> &S {
        &self.supplier
    }

    pub(crate) fn into_parts(self) -> (I, I, S, Characteristics, u64) {
        (
            self.start,
            self.end,
            self.supplier,
            self.characteristics,
            self.split_threshold,
        )
    }

    pub(crate) fn from_parts(
        start: I,
        end: I,
        supplier: S,
        characteristics: Characteristics,
        split_threshold: u64,
    ) -> Self {
        Self {
            start,
            end,
            supplier,
            characteristics,
            split_threshold,
        }
    }

    /// Exact number of indices left to visit.
    pub fn exact_size(&self) -> I {
        self.start.distance(&self.end)
    }

    /// Number of indices left to visit, saturating at `u64::MAX` when the
    /// exact size does not fit.
    pub fn estimate_size(&self) -> u64 {
        self.exact_size().saturating_u64()
    }

    /// Returns `true` once every index has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.start >= self.end
    }

    /// Properties of the remaining values.
    ///
    /// `SIZED` and `SUBSIZED` are only reported while the remaining size fits
    /// in a `u64`.
    pub fn characteristics(&self) -> Characteristics {
        if self.exact_size().to_u64().is_some() {
            self.characteristics | Characteristics::SIZED | Characteristics::SUBSIZED
        } else {
            self.characteristics
        }
    }

    /// Computes the value at the current index, advances, and hands the value
    /// to `consumer`.
    ///
    /// Returns `false` without calling `consumer` if the traversal is
    /// exhausted.
    pub fn try_advance(&mut self, consumer: impl FnOnce(S::Output)) -> bool {
        if self.is_exhausted() {
            return false;
        }
        let value = self.supplier.apply(&self.start);
        self.start.increment();
        consumer(value);
        true
    }

    /// Feeds every remaining value to `consumer`, in index order.
    pub fn for_each_remaining(&mut self, mut consumer: impl FnMut(S::Output)) {
        while self.try_advance(&mut consumer) {}
    }

    /// Splits off the lower half of the remaining range.
    ///
    /// Returns `None` when fewer than [`Self::split_threshold`] indices
    /// remain. Otherwise the returned traversal covers `[start, mid)` with a
    /// split copy of the supplier, and `self` continues over `[mid, end)` with
    /// another split copy.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_split(&mut self) -> Option<Self> {
        let size = self.exact_size();
        if size.saturating_u64() < self.split_threshold {
            #[cfg(feature = "tracing")]
            tracing::trace!(start = %self.start, end = %self.end, "split declined");
            return None;
        }

        let mid = self.start.offset(&size.half());
        let lower = Self {
            start: mem::replace(&mut self.start, mid.clone()),
            end: mid,
            supplier: self.supplier.split(),
            characteristics: self.characteristics,
            split_threshold: self.split_threshold,
        };
        self.supplier = self.supplier.split();

        #[cfg(feature = "tracing")]
        tracing::trace!(lower_start = %lower.start, mid = %self.start, end = %self.end, "split");
        Some(lower)
    }
}

impl<I, S> Iterator for IndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I>,
{
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = None;
        self.try_advance(|value| next = Some(value));
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self
            .exact_size()
            .to_u64()
            .and_then(|size| usize::try_from(size).ok())
        {
            Some(size) => (size, Some(size)),
            None => (usize::MAX, None),
        }
    }
}
