use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{IndexedSupplier, IndexedTraversal, Ordinal};

/// A rayon [`ParallelIterator`] over an [`IndexedTraversal`].
///
/// Rayon drives the decomposition: it calls
/// [`IndexedTraversal::try_split`] while it has idle workers, then drains each
/// piece sequentially. Splits keep the lower half on the left, so
/// order-preserving operations such as `collect::<Vec<_>>()` see values in
/// index order.
///
/// # Example
/// ```
/// use rayon::prelude::*;
/// use splitgen::CartesianProduct;
///
/// let product = CartesianProduct::<u64>::from_dimensions(&[3, 4, 5]).unwrap();
/// let tuples: Vec<Vec<u64>> = product.into_par_iter().collect();
///
/// assert_eq!(tuples.len(), 60);
/// assert_eq!(tuples[59], vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct ParIndexedTraversal<I, S> {
    inner: IndexedTraversal<I, S>,
}

impl<I, S> IntoParallelIterator for IndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I> + Send,
    S::Output: Send,
{
    type Iter = ParIndexedTraversal<I, S>;
    type Item = S::Output;

    fn into_par_iter(self) -> Self::Iter {
        ParIndexedTraversal { inner: self }
    }
}

impl<I, S> ParallelIterator for ParIndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I> + Send,
    S::Output: Send,
{
    type Item = S::Output;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(self.inner, consumer)
    }
}

impl<I, S> UnindexedProducer for IndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I> + Send,
    S::Output: Send,
{
    type Item = S::Output;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.try_split() {
            Some(lower) => (lower, Some(self)),
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self)
    }
}
