use crate::{IndexedSupplier, Ordinal, Splittable};

/// The stateless supplier that yields each index unchanged.
///
/// A zero-sized value, so there is no shared instance to synchronize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Splittable for Identity {
    fn split(&self) -> Self {
        Self
    }
}

impl<I: Ordinal> IndexedSupplier<I> for Identity {
    type Output = I;

    fn apply(&mut self, index: &I) -> I {
        index.clone()
    }
}
