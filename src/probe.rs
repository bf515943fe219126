//! Connectivity probe run before any generation work.

use anyhow::{Context, Result};
use postgres::{Client, NoTls};

use crate::config::DbConfig;

/// Open a connection and run a trivial diagnostic query.
///
/// Returns the connected client so the rest of the run reuses it; the
/// caller owns the connection for the remainder of the process.
pub fn connect(config: &DbConfig) -> Result<Client> {
    println!("{}", config.masked_summary());
    println!(
        "Probing {}:{}/{}...",
        config.host, config.port, config.database
    );

    let mut client = Client::connect(&config.url(), NoTls)
        .context("failed to connect to PostgreSQL")?;

    let row = client
        .query_one("SELECT version()", &[])
        .context("diagnostic query failed")?;
    let version: String = row.get(0);
    println!("Connected: {}", truncate(&version, 60));

    Ok(client)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
