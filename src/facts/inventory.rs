//! Inventory snapshot builder.
//!
//! One row per store for the current date, in store order. The sampled
//! product does not reflect a real store assortment.

use anyhow::{bail, Result};
use rand::Rng;

use crate::fake::SyntheticData;
use crate::table::{SqlValue, TableData};

use super::PROCESO_ORIGEN;

/// Reorder threshold stamped on every snapshot row
pub const STOCK_MINIMO: i64 = 10;

pub const COLUMNS: &[&str] = &[
    "inventario_sk",
    "tienda_sk",
    "producto_sk",
    "fecha_sk",
    "stock_disponible",
    "stock_actual",
    "stock_minimo",
    "dias_stock_restante",
    "fecha_carga",
    "proceso_origen",
];

/// Build the inventory snapshot: exactly one row per store key.
pub fn build<R: Rng>(
    fake: &mut SyntheticData<R>,
    store_keys: &[i64],
    product_keys: &[i64],
    today_sk: i64,
    loaded_at: &str,
) -> Result<TableData> {
    let mut data = TableData::new("fact_inventario", COLUMNS);
    if store_keys.is_empty() {
        return Ok(data);
    }
    if product_keys.is_empty() {
        bail!("cannot build fact_inventario: no product keys available");
    }

    data.rows.reserve(store_keys.len());
    for (i, tienda_sk) in store_keys.iter().enumerate() {
        data.rows.push(vec![
            SqlValue::Int(i as i64 + 1),
            SqlValue::Int(*tienda_sk),
            SqlValue::Int(fake.pick(product_keys)),
            SqlValue::Int(today_sk),
            SqlValue::Int(fake.int_range(0, 99)),
            SqlValue::Int(fake.int_range(0, 99)),
            SqlValue::Int(STOCK_MINIMO),
            SqlValue::Int(fake.int_range(1, 29)),
            SqlValue::Str(loaded_at.to_string()),
            SqlValue::Str(PROCESO_ORIGEN.to_string()),
        ]);
    }
    Ok(data)
}
