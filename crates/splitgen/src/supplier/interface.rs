use core::ops::Range;

use crate::Ordinal;

/// A capability for producing an independent working copy of a value
/// supplier.
///
/// A traversal calls [`Splittable::split`] every time it hands half of its
/// range to another worker. The copy must compute the same `index -> value`
/// function as the original, and the two must be usable concurrently without
/// sharing mutable state.
///
/// - A stateless supplier returns a copy of itself (for configuration held
///   behind an `Arc`, this is a reference-count bump).
/// - A supplier with per-instance scratch state (buffers, caches, an RNG)
///   returns a copy whose state is freshly initialized.
pub trait Splittable: Sized {
    /// Returns an independent instance computing the same function.
    fn split(&self) -> Self;
}

/// A function from an index to a value that can be split for parallel work.
///
/// `apply` takes `&mut self` so that suppliers may keep scratch state without
/// interior mutability; [`Splittable`] guarantees each traversal half owns its
/// own copy.
pub trait IndexedSupplier<I: Ordinal>: Splittable {
    /// The value produced for each index.
    type Output;

    /// Computes the value at `index`.
    ///
    /// Traversals only call this with indices inside their own range, which
    /// [`IndexedTraversal::new`](crate::IndexedTraversal::new) keeps within
    /// [`Self::domain`].
    fn apply(&mut self, index: &I) -> Self::Output;

    /// The indices this supplier is defined on, or `None` if every `I` is
    /// accepted.
    fn domain(&self) -> Option<Range<I>> {
        None
    }
}
