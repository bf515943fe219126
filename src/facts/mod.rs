//! Fact builders for the star schema.
//!
//! Both builders require datastore-assigned dimension keys, so they run
//! only after the dimensions are loaded and re-fetched.

pub mod inventory;
pub mod sales;

/// Source-process tag stamped on every fact row
pub const PROCESO_ORIGEN: &str = "ETL_Generado";
