#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::config::{CliArgs, GenConfig};
use cli::run::run;
use cli::telemetry::init_telemetry;

// mimalloc holds up better than the system allocator when every rayon worker
// allocates tuples at once, especially on musl targets.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = GenConfig::try_from(args)?;

    init_telemetry()?;

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("splitgen-{index}"))
            .build_global()?;
    }

    log_startup_info(&config);
    run(&config)
}

fn log_startup_info(config: &GenConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting splitgen with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Starting splitgen with {} threads",
            rayon::current_num_threads()
        );
    }
}
