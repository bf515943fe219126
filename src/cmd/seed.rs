//! Seed command: the full generate-and-load pipeline.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DbConfig;
use crate::fake::SyntheticData;
use crate::pipeline::{self, SeedParams, SeedSummary};
use crate::probe;

/// Generate the star-schema dataset and append it to the target database
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  star-seeder seed
  star-seeder seed --stores 50 --products 20 --daily-transactions 30
  star-seeder seed --start-year 2020 --end-year 2020 --seed 42 --progress
  star-seeder seed --dry-run")]
pub struct SeedArgs {
    /// Number of synthetic stores
    #[arg(long, default_value = "300")]
    pub stores: usize,

    /// Number of synthetic products
    #[arg(long, default_value = "100")]
    pub products: usize,

    /// Average sales transactions generated per calendar day
    #[arg(long, default_value = "150")]
    pub daily_transactions: usize,

    /// Years of history before the current year
    #[arg(long, default_value = "5", conflicts_with = "start_year")]
    pub years_history: u32,

    /// First year of the date dimension (overrides --years-history)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of the date dimension (default: current year)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows per INSERT batch
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// Skip the inventory snapshot
    #[arg(long)]
    pub no_inventory: bool,

    /// Show progress bars during load
    #[arg(short, long)]
    pub progress: bool,

    /// Generate and report row counts without writing to the database
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: SeedArgs) -> Result<()> {
    let (start_year, end_year) =
        pipeline::resolve_year_range(args.start_year, args.end_year, args.years_history)?;
    let params = SeedParams {
        stores: args.stores,
        products: args.products,
        daily_transactions: args.daily_transactions,
        start_year,
        end_year,
        batch_size: args.batch_size,
        include_inventory: !args.no_inventory,
        progress: args.progress,
    };
    pipeline::validate(&params)?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut fake = SyntheticData::new(StdRng::seed_from_u64(seed));

    let summary = if args.dry_run {
        println!("Dry run: generating without loading.");
        pipeline::dry_run(&mut fake, &params)?
    } else {
        let config = DbConfig::from_env()?;
        let mut client = probe::connect(&config)?;
        pipeline::run(&mut client, &mut fake, &params)?
    };

    print_summary(&summary, args.dry_run);
    Ok(())
}

fn print_summary(summary: &SeedSummary, dry_run: bool) {
    if dry_run {
        println!("\nDry run complete. Would load:");
    } else {
        println!("\nSeed complete:");
    }
    for (table, rows) in &summary.tables {
        println!("  {table:<18} {rows} rows");
    }
}
