use core::ops::Range;

use crate::{
    Characteristics, FeistelShuffler, IndexedSupplier, IndexedTraversal, Ordinal, Splittable,
};

/// A supplier that visits the values of `S` in shuffled order.
///
/// Index `i` of a range starting at `base` is replaced by
/// `base + shuffler(i - base)` before `S` is applied, so the traversal still
/// produces every value of its range exactly once.
#[derive(Clone, Debug)]
pub struct Shuffled<S, I> {
    inner: S,
    shuffler: FeistelShuffler<I>,
    base: I,
}

impl<S, I> Shuffled<S, I> {
    /// The underlying supplier.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// The permutation applied to indices.
    pub const fn shuffler(&self) -> &FeistelShuffler<I> {
        &self.shuffler
    }
}

impl<S, I> Splittable for Shuffled<S, I>
where
    S: Splittable,
    I: Clone,
{
    fn split(&self) -> Self {
        Self {
            inner: self.inner.split(),
            shuffler: self.shuffler.split(),
            base: self.base.clone(),
        }
    }
}

impl<S, I> IndexedSupplier<I> for Shuffled<S, I>
where
    S: IndexedSupplier<I>,
    I: Ordinal,
{
    type Output = S::Output;

    fn apply(&mut self, index: &I) -> S::Output {
        let local = self.base.distance(index);
        let target = self.base.offset(&self.shuffler.permute(&local));
        self.inner.apply(&target)
    }

    fn domain(&self) -> Option<Range<I>> {
        Some(self.base.clone()..self.base.offset(self.shuffler.count()))
    }
}

impl<I, S> IndexedTraversal<I, S>
where
    I: Ordinal,
    S: IndexedSupplier<I>,
{
    /// Visits the remaining values in a pseudorandom order, using a
    /// non-deterministic seed.
    ///
    /// The shuffled traversal produces the same multiset of values and can
    /// still be split for parallel work.
    pub fn shuffle(self) -> IndexedTraversal<I, Shuffled<S, I>> {
        let shuffler = FeistelShuffler::new(self.exact_size());
        self.shuffle_by(shuffler)
    }

    /// Visits the remaining values in the pseudorandom order keyed by `seed`.
    ///
    /// # Example
    /// ```
    /// use splitgen::CartesianProduct;
    ///
    /// let product = CartesianProduct::<u64>::from_dimensions(&[3, 3]).unwrap();
    /// let a: Vec<_> = product.clone().shuffle_with_seed(7).collect();
    /// let b: Vec<_> = product.shuffle_with_seed(7).collect();
    ///
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 9);
    /// ```
    pub fn shuffle_with_seed(self, seed: u64) -> IndexedTraversal<I, Shuffled<S, I>> {
        let shuffler = FeistelShuffler::from_seed(self.exact_size(), seed);
        self.shuffle_by(shuffler)
    }

    fn shuffle_by(self, shuffler: FeistelShuffler<I>) -> IndexedTraversal<I, Shuffled<S, I>> {
        let (start, end, inner, characteristics, split_threshold) = self.into_parts();
        let supplier = Shuffled {
            inner,
            shuffler,
            base: start.clone(),
        };
        IndexedTraversal::from_parts(
            start,
            end,
            supplier,
            characteristics.difference(Characteristics::SORTED),
            split_threshold,
        )
    }
}
