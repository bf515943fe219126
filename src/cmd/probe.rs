//! Probe command: connection check only, no generation.

use anyhow::Result;

use crate::config::DbConfig;
use crate::probe;

pub fn run() -> Result<()> {
    let config = DbConfig::from_env()?;
    probe::connect(&config)?;
    println!("Probe OK.");
    Ok(())
}
