//! CLI argument definitions for seeding.

use crate::input::DEFAULT_INPUT_PATH;
use crate::seeder::SeedConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments controlling the seeding run.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Path to the JSON array of restaurants produced by the fetch step
    #[arg(long, short = 'i', env = "RESTAURANTS_FILE", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Log progress after every N created or updated restaurants
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u64).range(1..))]
    pub progress_every: u64,

    /// Dry run mode - look up restaurants but don't write anything
    #[arg(long)]
    pub dry_run: bool,
}

impl SeedArgs {
    pub fn seed_config(&self) -> SeedConfig {
        SeedConfig {
            progress_every: self.progress_every,
            dry_run: self.dry_run,
        }
    }
}
