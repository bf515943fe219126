//! Init command: bootstrap the destination tables.

use anyhow::{Context, Result};

use crate::config::DbConfig;
use crate::probe;
use crate::schema;

pub fn run() -> Result<()> {
    let config = DbConfig::from_env()?;
    let mut client = probe::connect(&config)?;

    for table in schema::star_schema() {
        client
            .batch_execute(&table.create_ddl())
            .with_context(|| format!("failed to create table {}", table.name))?;
        println!("Ensured table {}", table.name);
    }

    Ok(())
}
