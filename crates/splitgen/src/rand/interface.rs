/// Where a [`FeistelShuffler`](crate::FeistelShuffler) gets its seed when the
/// caller does not name one.
///
/// Unseeded shufflers draw from [`ThreadRandom`](crate::ThreadRandom).
/// [`FeistelShuffler::with_rand`](crate::FeistelShuffler::with_rand) accepts
/// any other source, e.g. one that hands out seeds from a job schedule so a
/// batch can be replayed later.
///
/// # Example
/// ```
/// use core::cell::Cell;
/// use splitgen::{FeistelShuffler, RandSource};
///
/// struct SeedSchedule(Cell<u64>);
///
/// impl RandSource<u64> for SeedSchedule {
///     fn rand(&self) -> u64 {
///         let seed = self.0.get();
///         self.0.set(seed + 1);
///         seed
///     }
/// }
///
/// let schedule = SeedSchedule(Cell::new(100));
/// let first = FeistelShuffler::with_rand(10u64, &schedule);
/// let second = FeistelShuffler::with_rand(10u64, &schedule);
///
/// assert_eq!(first.seed(), 100);
/// assert_eq!(second.seed(), 101);
/// ```
pub trait RandSource<T> {
    /// Produces the next seed.
    fn rand(&self) -> T;
}
