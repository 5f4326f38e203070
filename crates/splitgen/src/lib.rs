//! Lazy, parallel-splittable streams over huge index domains.
//!
//! `splitgen` maps each index of a range `[start, end)` to a value on demand,
//! so combinatorial sequences far larger than memory (or than `u64`) can be
//! streamed, sampled and processed in parallel.
//!
//! - [`IndexedTraversal`] walks a range sequentially ([`Iterator`]) or, with
//!   the `rayon` feature, in parallel by bisecting it.
//! - [`Splittable`] / [`IndexedSupplier`] describe the `index -> value`
//!   function and how to copy it when the range is split.
//! - [`CartesianProduct`] streams the tuples of a cartesian product.
//! - [`ShuffledRange`] and [`IndexedTraversal::shuffle_with_seed`] visit a
//!   range in a seed-determined pseudorandom order without a lookup table.
//!
//! Ranges are indexed by any [`Ordinal`]: `u32`, `u64`, `u128`, or
//! [`num::BigUint`] for domains of unbounded size.
//!
//! # Example
//! ```
//! use num::BigUint;
//! use splitgen::{CartesianProduct, Error};
//!
//! // 3e9 * 3e9 * 3 tuples do not fit in a u64 index...
//! let dims: [i64; 3] = [3_000_000_000, 3_000_000_000, 3];
//! assert!(matches!(
//!     CartesianProduct::<u64>::from_dimensions(&dims),
//!     Err(Error::CountOverflow { .. })
//! ));
//!
//! // ...but a BigUint-indexed product streams them lazily.
//! let mut product = CartesianProduct::<BigUint>::from_dimensions(&dims).unwrap();
//! assert_eq!(product.next(), Some(vec![0, 0, 0]));
//! assert_eq!(product.next(), Some(vec![0, 0, 1]));
//! ```
//!
//! ## Features
//! - `rayon` (default): parallel traversal through `rayon::iter`.
//! - `tracing`: `trace`/`debug` spans on construction and splitting.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod index;
mod product;
mod rand;
mod shuffle;
mod supplier;
mod traversal;

pub use crate::error::*;
pub use crate::index::*;
pub use crate::product::*;
pub use crate::rand::*;
pub use crate::shuffle::*;
pub use crate::supplier::*;
pub use crate::traversal::*;
