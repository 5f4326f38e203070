use anyhow::bail;
use clap::{Parser, Subcommand};
use num::BigUint;
use splitgen::{DEFAULT_SPLIT_THRESHOLD, SeedPolicy};

/// Command-line arguments for the `splitgen` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file), which is handy when the generator runs as a batch job.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "splitgen",
    version,
    about = "Stream cartesian products and shuffled ranges of any size"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Seed for shuffled output. The same seed always yields the same order.
    ///
    /// Environment variable: `SPLITGEN_SEED`
    #[arg(long, env = "SPLITGEN_SEED", global = true)]
    pub seed: Option<u64>,

    /// Refuse to shuffle without an explicit `--seed`.
    ///
    /// Environment variable: `SPLITGEN_REQUIRE_SEED`
    #[arg(long, env = "SPLITGEN_REQUIRE_SEED", default_value_t = false, global = true)]
    pub require_seed: bool,

    /// Index with arbitrary-precision integers instead of `u64`.
    ///
    /// Required once the number of generated values exceeds `u64::MAX`.
    ///
    /// Environment variable: `SPLITGEN_BIG`
    #[arg(long, env = "SPLITGEN_BIG", default_value_t = false, global = true)]
    pub big: bool,

    /// Size of the rayon pool used by `--parallel`. Defaults to one thread per
    /// core.
    ///
    /// Environment variable: `SPLITGEN_THREADS`
    #[arg(long, env = "SPLITGEN_THREADS", global = true)]
    pub threads: Option<usize>,

    /// Smallest range the traversal will still split in two.
    ///
    /// Environment variable: `SPLITGEN_SPLIT_THRESHOLD`
    #[arg(long, env = "SPLITGEN_SPLIT_THRESHOLD", default_value_t = DEFAULT_SPLIT_THRESHOLD, global = true)]
    pub split_threshold: u64,

    /// Number of leading values printed to stdout.
    ///
    /// Environment variable: `SPLITGEN_LIMIT`
    #[arg(long, env = "SPLITGEN_LIMIT", default_value_t = 20, global = true)]
    pub limit: usize,

    /// Also drain the whole stream on the rayon pool and log its size and an
    /// order-independent checksum.
    #[arg(long, default_value_t = false, global = true)]
    pub parallel: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Every tuple of the product of sets with the given sizes.
    Product {
        /// Set sizes, one per dimension.
        #[arg(allow_negative_numbers = true)]
        dimensions: Vec<i64>,

        /// Emit the tuples in shuffled order.
        #[arg(long, default_value_t = false)]
        shuffle: bool,
    },
    /// The integers `[0, COUNT)` in shuffled order.
    Shuffle {
        /// Number of integers to shuffle.
        count: BigUint,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workload {
    Product { dimensions: Vec<i64>, shuffle: bool },
    Shuffle { count: BigUint },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub workload: Workload,
    pub seed: Option<u64>,
    pub seed_policy: SeedPolicy,
    pub big: bool,
    pub threads: Option<usize>,
    pub split_threshold: u64,
    pub limit: usize,
    pub parallel: bool,
}

impl TryFrom<CliArgs> for GenConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.threads == Some(0) {
            bail!("SPLITGEN_THREADS must be greater than 0");
        }

        if args.split_threshold < DEFAULT_SPLIT_THRESHOLD {
            bail!(
                "SPLITGEN_SPLIT_THRESHOLD ({}) must be at least {}",
                args.split_threshold,
                DEFAULT_SPLIT_THRESHOLD
            );
        }

        let workload = match args.command {
            Command::Product {
                dimensions,
                shuffle,
            } => Workload::Product {
                dimensions,
                shuffle,
            },
            Command::Shuffle { count } => {
                if !args.big && count.bits() > 64 {
                    bail!("COUNT ({}) does not fit in a u64; pass --big", count);
                }
                Workload::Shuffle { count }
            }
        };

        let seed_policy = if args.require_seed {
            SeedPolicy::Deterministic
        } else {
            SeedPolicy::AllowRandom
        };

        Ok(Self {
            workload,
            seed: args.seed,
            seed_policy,
            big: args.big,
            threads: args.threads,
            split_threshold: args.split_threshold,
            limit: args.limit,
            parallel: args.parallel,
        })
    }
}
