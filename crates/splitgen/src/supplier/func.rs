use crate::{IndexedSupplier, Ordinal, Splittable};

/// Lifts a cloneable closure into a supplier.
///
/// Splitting clones the closure, so any captured state must be cheap to copy
/// (or shared immutably, e.g. behind an `Arc`).
#[derive(Clone, Copy, Debug)]
pub struct FnSupplier<F> {
    f: F,
}

/// Creates a [`FnSupplier`] from `f`.
///
/// # Example
/// ```
/// use splitgen::{IndexedTraversal, from_fn};
///
/// let squares: Vec<u64> = IndexedTraversal::new(0u64, 5, from_fn(|i: &u64| i * i))
///     .unwrap()
///     .collect();
/// assert_eq!(squares, vec![0, 1, 4, 9, 16]);
/// ```
pub const fn from_fn<F>(f: F) -> FnSupplier<F> {
    FnSupplier { f }
}

impl<F: Clone> Splittable for FnSupplier<F> {
    fn split(&self) -> Self {
        self.clone()
    }
}

impl<I, T, F> IndexedSupplier<I> for FnSupplier<F>
where
    I: Ordinal,
    F: Fn(&I) -> T + Clone,
{
    type Output = T;

    fn apply(&mut self, index: &I) -> T {
        (self.f)(index)
    }
}
