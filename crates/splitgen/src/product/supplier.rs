use core::ops::Range;
use std::sync::Arc;

use num::{BigUint, One};

use crate::{Error, IndexedSupplier, Ordinal, Result, Splittable};

/// Computes the cardinality of the cartesian product of sets with the given
/// sizes.
///
/// The result is exact regardless of how large it is. An empty dimension list
/// has exactly one (empty) tuple.
///
/// # Errors
/// - [`Error::NegativeDimension`] if any size is negative.
pub fn product_count(dimensions: &[i64]) -> Result<BigUint> {
    Ok(multiply(&validate(dimensions)?))
}

fn multiply(dimensions: &[u64]) -> BigUint {
    dimensions
        .iter()
        .fold(BigUint::one(), |count, &dim| count * dim)
}

fn validate(dimensions: &[i64]) -> Result<Vec<u64>> {
    dimensions
        .iter()
        .enumerate()
        .map(|(position, &dim)| {
            u64::try_from(dim).map_err(|_| Error::NegativeDimension {
                dimensions: dimensions.to_vec(),
                position,
            })
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
struct Shape {
    dimensions: Vec<u64>,
    count: BigUint,
}

/// Maps a linear index to a coordinate tuple of a cartesian product.
///
/// Coordinates are digits of a mixed-radix number whose radices are the
/// dimension sizes, with the **last** dimension varying fastest: index `0` is
/// all zeros and index `count - 1` is `(d_0 - 1, ..., d_{n-1} - 1)`.
///
/// The supplier is stateless; splitting shares the immutable shape.
///
/// # Example
/// ```
/// use splitgen::ProductSupplier;
///
/// let supplier = ProductSupplier::new(&[2, 3]).unwrap();
/// assert_eq!(supplier.coordinates(&5u64).unwrap(), vec![1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSupplier {
    shape: Arc<Shape>,
}

impl ProductSupplier {
    /// Creates a supplier for the product of sets with the given sizes.
    ///
    /// # Errors
    /// - [`Error::NegativeDimension`] if any size is negative.
    pub fn new(dimensions: &[i64]) -> Result<Self> {
        let dimensions = validate(dimensions)?;
        let count = multiply(&dimensions);
        Ok(Self {
            shape: Arc::new(Shape { dimensions, count }),
        })
    }

    /// The validated dimension sizes.
    pub fn dimensions(&self) -> &[u64] {
        &self.shape.dimensions
    }

    /// The number of tuples in the product.
    pub fn count(&self) -> &BigUint {
        &self.shape.count
    }

    /// Returns the coordinate tuple at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= count`.
    pub fn coordinates<I: Ordinal>(&self, index: &I) -> Result<Vec<u64>> {
        if index.to_biguint() >= self.shape.count {
            return Err(Error::IndexOutOfRange {
                index: index.to_string(),
                count: self.shape.count.to_string(),
            });
        }
        Ok(self.decompose(index))
    }

    // Callers guarantee `index < count`, so every dimension is non-zero.
    fn decompose<I: Ordinal>(&self, index: &I) -> Vec<u64> {
        let dimensions = &self.shape.dimensions;
        let mut coordinates = vec![0; dimensions.len()];
        let mut rest = index.clone();
        for (coordinate, &dim) in coordinates.iter_mut().zip(dimensions).rev() {
            let (quotient, remainder) = rest.div_rem_u64(dim);
            *coordinate = remainder;
            rest = quotient;
        }
        coordinates
    }
}

impl Splittable for ProductSupplier {
    fn split(&self) -> Self {
        self.clone()
    }
}

impl<I: Ordinal> IndexedSupplier<I> for ProductSupplier {
    type Output = Vec<u64>;

    fn apply(&mut self, index: &I) -> Vec<u64> {
        self.decompose(index)
    }

    /// `None` when the tuple count does not fit in `I`, since every `I` then
    /// names a tuple.
    fn domain(&self) -> Option<Range<I>> {
        I::from_biguint(self.count()).map(|count| I::zero()..count)
    }
}
