//! ModPulse CLI entry point

use anyhow::Result;
use modpulse::config::cli::Cli;
use modpulse::coordinator::{PhaseContext, Strategy};
use modpulse::util::time::PhaseTimer;
use modpulse::{input, partition};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.to_config()?;

    // The array and division table are built once and shared by all four
    // strategies; per-phase state is reset inside each run.
    let data = Arc::new(input::generate(config.array_size, config.zero_index));
    let divisions = partition::partition(config.array_size, config.thread_count);
    let context = PhaseContext::new(data, divisions);

    for strategy in Strategy::ALL {
        let timer = PhaseTimer::start();
        let product = context.run(strategy)?;
        println!(
            "{} completed in {} ms. Product = {}",
            strategy,
            timer.elapsed_millis(),
            product
        );
    }

    Ok(())
}
