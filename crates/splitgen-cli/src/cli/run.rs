use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::anyhow;
use num::BigUint;
use rayon::prelude::*;
use splitgen::{
    CartesianProduct, Error, IndexedSupplier, IndexedTraversal, Ordinal, SeedPolicy,
    ShuffledRange,
};

use crate::cli::config::{GenConfig, Workload};

/// Size and checksum of a fully drained stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: u64,
    pub checksum: u64,
}

/// Runs the configured workload, printing leading values to stdout.
pub fn run(config: &GenConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.big {
        run_with::<BigUint, _>(config, &mut out)
    } else {
        run_with::<u64, _>(config, &mut out)
    }
}

pub fn run_with<I: Ordinal, W: Write>(config: &GenConfig, out: &mut W) -> anyhow::Result<()> {
    match &config.workload {
        Workload::Product {
            dimensions,
            shuffle,
        } => {
            let product = CartesianProduct::<I>::from_dimensions(dimensions)?
                .with_split_threshold(config.split_threshold);
            if !shuffle {
                return emit(product, config, out);
            }
            let shuffled = match (config.seed, config.seed_policy) {
                (Some(seed), _) => product.shuffle_with_seed(seed),
                (None, SeedPolicy::AllowRandom) => product.shuffle(),
                (None, SeedPolicy::Deterministic) => return Err(Error::MissingSeed.into()),
            };
            tracing::info!(seed = shuffled.supplier().shuffler().seed(), "Shuffling product");
            emit(shuffled, config, out)
        }
        Workload::Shuffle { count } => {
            let count = I::from_biguint(count)
                .ok_or_else(|| anyhow!("COUNT ({}) does not fit in a {}", count, I::NAME))?;
            let range = ShuffledRange::<I>::resolve(count, config.seed, config.seed_policy)?
                .with_split_threshold(config.split_threshold);
            tracing::info!(seed = range.seed(), "Shuffling range");
            emit(range, config, out)
        }
    }
}

fn emit<I, S, W>(traversal: IndexedTraversal<I, S>, config: &GenConfig, out: &mut W) -> anyhow::Result<()>
where
    I: Ordinal,
    S: IndexedSupplier<I> + Clone + Send,
    S::Output: Debug + Hash + Send,
    W: Write,
{
    tracing::info!(
        repr = I::NAME,
        size = %traversal.exact_size(),
        characteristics = ?traversal.characteristics(),
        "Starting traversal"
    );

    for value in traversal.clone().take(config.limit) {
        writeln!(out, "{value:?}")?;
    }
    out.flush()?;

    if config.parallel {
        let started = Instant::now();
        let summary = summarize(traversal);
        tracing::info!(
            count = summary.count,
            checksum = %format!("{:016x}", summary.checksum),
            elapsed_ms = started.elapsed().as_millis() as u64,
            threads = rayon::current_num_threads(),
            "Parallel pass complete"
        );
    }
    Ok(())
}

/// Drains `traversal` on the current rayon pool.
///
/// The checksum is a wrapping sum of per-value hashes, so it does not depend
/// on how the range was split or in which order pieces finished.
pub fn summarize<I, S>(traversal: IndexedTraversal<I, S>) -> Summary
where
    I: Ordinal,
    S: IndexedSupplier<I> + Send,
    S::Output: Hash + Send,
{
    traversal
        .into_par_iter()
        .map(|value| Summary {
            count: 1,
            checksum: digest(&value),
        })
        .reduce(
            || Summary {
                count: 0,
                checksum: 0,
            },
            |a, b| Summary {
                count: a.count + b.count,
                checksum: a.checksum.wrapping_add(b.checksum),
            },
        )
}

fn digest<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
