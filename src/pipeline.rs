//! End-to-end seeding pipeline.
//!
//! The ordering is strict: dimensions are loaded and their assigned keys
//! re-fetched before any fact row referencing them is generated, so every
//! fact foreign key exists in the datastore by the time it is written.

use anyhow::Result;
use chrono::{Datelike, Local};
use postgres::Client;
use rand::Rng;

use crate::dims::{date, product, store};
use crate::facts::{inventory, sales};
use crate::fake::SyntheticData;
use crate::loader::Loader;
use crate::schema;
use crate::table::TableData;

/// Generation parameters for one run
#[derive(Debug, Clone)]
pub struct SeedParams {
    pub stores: usize,
    pub products: usize,
    pub daily_transactions: usize,
    pub start_year: i32,
    pub end_year: i32,
    pub batch_size: usize,
    pub include_inventory: bool,
    pub progress: bool,
}

/// Row counts per table produced by a run
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub tables: Vec<(String, u64)>,
}

impl SeedSummary {
    fn record(&mut self, table: &str, rows: u64) {
        self.tables.push((table.to_string(), rows));
    }

    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, rows)| *rows)
    }
}

/// Run the full pipeline against a connected datastore.
pub fn run<R: Rng>(
    client: &mut Client,
    fake: &mut SyntheticData<R>,
    params: &SeedParams,
) -> Result<SeedSummary> {
    let loaded_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let today_sk = date::date_sk(Local::now().date_naive());
    let mut summary = SeedSummary::default();

    let mut loader = Loader::new(client)
        .with_batch_size(params.batch_size)
        .with_progress(params.progress);
    for table in schema::star_schema() {
        loader.ensure_table(&table)?;
    }

    // Dimensions first, for referential integrity.
    println!(
        "Generating date dimension ({}..{})...",
        params.start_year, params.end_year
    );
    let dim_fecha = date::build(params.start_year, params.end_year)?;
    let date_keys = date::surrogate_keys(&dim_fecha);
    summary.record("dim_fecha", loader.append(&dim_fecha)?);

    println!("Generating store dimension ({} stores)...", params.stores);
    let dim_tienda = store::build(fake, params.stores);
    summary.record("dim_tienda", loader.append(&dim_tienda)?);

    println!(
        "Generating product dimension ({} products)...",
        params.products
    );
    let dim_producto = product::build(fake, params.products);
    summary.record("dim_producto", loader.append(&dim_producto)?);

    // The datastore assigns the store/product surrogate keys on insert, so
    // they are only known after the load completes.
    println!("Recovering datastore-assigned surrogate keys...");
    let store_keys = loader.fetch_store_keys()?;
    let products = loader.fetch_product_prices()?;

    println!(
        "Generating sales facts ({} dates x {} transactions/day)...",
        date_keys.len(),
        params.daily_transactions
    );
    let fact_ventas = sales::build(
        fake,
        &date_keys,
        &store_keys,
        &products,
        params.daily_transactions,
        &loaded_at,
    )?;
    summary.record("fact_ventas", loader.append(&fact_ventas)?);

    if params.include_inventory {
        println!("Generating inventory snapshot...");
        let product_keys: Vec<i64> = products.iter().map(|(sk, _)| *sk).collect();
        let fact_inventario = inventory::build(
            fake,
            &store_keys[..params.stores.min(store_keys.len())],
            &product_keys,
            today_sk,
            &loaded_at,
        )?;
        summary.record("fact_inventario", loader.append(&fact_inventario)?);
    }

    Ok(summary)
}

/// Generate everything without touching the datastore.
///
/// Store and product keys are synthesized locally (1..=N) in place of the
/// re-fetch step so the fact volumes still materialize for the report.
pub fn dry_run<R: Rng>(fake: &mut SyntheticData<R>, params: &SeedParams) -> Result<SeedSummary> {
    let loaded_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let today_sk = date::date_sk(Local::now().date_naive());
    let mut summary = SeedSummary::default();

    let dim_fecha = date::build(params.start_year, params.end_year)?;
    let date_keys = date::surrogate_keys(&dim_fecha);
    record_generated(&mut summary, &dim_fecha);

    let dim_tienda = store::build(fake, params.stores);
    record_generated(&mut summary, &dim_tienda);

    let dim_producto = product::build(fake, params.products);
    record_generated(&mut summary, &dim_producto);

    let store_keys: Vec<i64> = (1..=params.stores as i64).collect();
    let products: Vec<(i64, f64)> = product::unit_prices(&dim_producto)
        .into_iter()
        .enumerate()
        .map(|(i, price)| (i as i64 + 1, price))
        .collect();

    let fact_ventas = sales::build(
        fake,
        &date_keys,
        &store_keys,
        &products,
        params.daily_transactions,
        &loaded_at,
    )?;
    record_generated(&mut summary, &fact_ventas);

    if params.include_inventory {
        let product_keys: Vec<i64> = products.iter().map(|(sk, _)| *sk).collect();
        let fact_inventario =
            inventory::build(fake, &store_keys, &product_keys, today_sk, &loaded_at)?;
        record_generated(&mut summary, &fact_inventario);
    }

    Ok(summary)
}

fn record_generated(summary: &mut SeedSummary, data: &TableData) {
    summary.record(&data.table, data.row_count() as u64);
}

/// Resolve the year range from CLI arguments.
///
/// Explicit bounds win; otherwise the range is the trailing
/// `years_history` years ending in the current year.
pub fn resolve_year_range(
    start_year: Option<i32>,
    end_year: Option<i32>,
    years_history: u32,
) -> Result<(i32, i32)> {
    let current_year = Local::now().year();
    let end = end_year.unwrap_or(current_year);
    let start = start_year.unwrap_or(end - years_history as i32);
    if start > end {
        anyhow::bail!("invalid year range: {start} > {end}");
    }
    Ok((start, end))
}

/// Validate parameters that every entry point shares
pub fn validate(params: &SeedParams) -> Result<()> {
    if params.daily_transactions > 0 && params.stores == 0 {
        anyhow::bail!("--daily-transactions requires at least one store");
    }
    if params.daily_transactions > 0 && params.products == 0 {
        anyhow::bail!("--daily-transactions requires at least one product");
    }
    if params.include_inventory && params.stores > 0 && params.products == 0 {
        anyhow::bail!("the inventory snapshot requires at least one product");
    }
    Ok(())
}
