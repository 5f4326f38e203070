#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Characteristics, Error, IndexedTraversal, Ordinal, ProductSupplier, Result};

/// A lazy stream of every tuple of a cartesian product, indexed by `I`.
///
/// Pick `u64` (or `u32`/`u128`) when the number of tuples fits the type, and
/// `num::BigUint` otherwise.
///
/// # Example
/// ```
/// use splitgen::CartesianProduct;
///
/// let tuples: Vec<Vec<u64>> = CartesianProduct::<u64>::from_dimensions(&[2, 3])
///     .unwrap()
///     .collect();
///
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[0], vec![0, 0]);
/// assert_eq!(tuples[1], vec![0, 1]);
/// assert_eq!(tuples[5], vec![1, 2]);
/// ```
pub type CartesianProduct<I = u64> = IndexedTraversal<I, ProductSupplier>;

impl<I: Ordinal> IndexedTraversal<I, ProductSupplier> {
    /// Creates a stream over the product of sets with the given sizes.
    ///
    /// The stream reports [`Characteristics::DISTINCT`]: every tuple appears
    /// exactly once.
    ///
    /// # Errors
    /// - [`Error::NegativeDimension`] if any size is negative.
    /// - [`Error::CountOverflow`] if the number of tuples does not fit in `I`.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", fields(repr = I::NAME)))]
    pub fn from_dimensions(dimensions: &[i64]) -> Result<Self> {
        let supplier = ProductSupplier::new(dimensions)?;
        let count = I::from_biguint(supplier.count()).ok_or_else(|| Error::CountOverflow {
            repr: I::NAME,
            count: supplier.count().clone(),
        })?;
        Ok(Self::counted(count, supplier).with_additional_characteristics(Characteristics::DISTINCT))
    }

    /// The dimension sizes of the product.
    pub fn dimensions(&self) -> &[u64] {
        self.supplier().dimensions()
    }
}
