//! CLI argument parsing using clap

use crate::config::{cli_convert, Config, MAX_ARRAY_SIZE, MAX_THREADS};
use anyhow::{Context, Result};
use clap::Parser;

/// ModPulse - thread coordination benchmark
#[derive(Parser, Debug)]
#[command(name = "modpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Array size; accepts an `M` suffix (millions) and a `+<offset>` addend, e.g. "100M+5"
    #[arg(value_name = "ARRAY_SIZE")]
    pub array_size: String,

    /// Number of worker threads
    #[arg(value_name = "THREADS")]
    pub threads: usize,

    /// Index forced to zero, or -1 for none (same syntax as ARRAY_SIZE)
    #[arg(value_name = "ZERO_INDEX", allow_hyphen_values = true)]
    pub zero_index: String,
}

impl Cli {
    /// Parse arguments from the process command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve and validate the raw arguments into a run configuration
    ///
    /// All violations are fatal: the caller reports the error and exits with a
    /// non-zero status.
    pub fn to_config(&self) -> Result<Config> {
        let array_size =
            cli_convert::parse_scaled(&self.array_size).context("Invalid array size")?;
        if array_size <= 0 || array_size > MAX_ARRAY_SIZE as i64 {
            anyhow::bail!(
                "array size must be between 1 and {}, got {}",
                MAX_ARRAY_SIZE,
                array_size
            );
        }
        let array_size = array_size as usize;

        if self.threads == 0 || self.threads > MAX_THREADS {
            anyhow::bail!(
                "thread count must be between 1 and {}, got {}",
                MAX_THREADS,
                self.threads
            );
        }

        let zero_index =
            cli_convert::parse_scaled(&self.zero_index).context("Invalid zero index")?;
        if zero_index < -1 || zero_index >= array_size as i64 {
            anyhow::bail!(
                "zero index must be between -1 and {}, got {}",
                array_size as i64 - 1,
                zero_index
            );
        }
        let zero_index = usize::try_from(zero_index).ok();

        Ok(Config {
            array_size,
            thread_count: self.threads,
            zero_index,
        })
    }
}
