//! Sales fact builder.
//!
//! Produces `|dates| * daily_transactions` rows with independently sampled
//! foreign keys. The three draws are uncorrelated on purpose: this is flat
//! test data, not a seasonal or assortment-aware model.

use anyhow::{bail, Result};
use rand::Rng;

use crate::fake::SyntheticData;
use crate::table::{SqlValue, TableData};

use super::PROCESO_ORIGEN;

/// Column order is part of the public interface and must not change.
pub const COLUMNS: &[&str] = &[
    "venta_sk",
    "fecha_sk",
    "tienda_sk",
    "producto_sk",
    "cantidad",
    "monto_total",
    "ticket_id",
    "fecha_carga",
    "proceso_origen",
];

/// Build the sales fact table.
///
/// `products` pairs each datastore-assigned product key with its unit
/// price; `monto_total` is joined from it at generation time.
pub fn build<R: Rng>(
    fake: &mut SyntheticData<R>,
    date_keys: &[i64],
    store_keys: &[i64],
    products: &[(i64, f64)],
    daily_transactions: usize,
    loaded_at: &str,
) -> Result<TableData> {
    let num_rows = date_keys.len() * daily_transactions;
    let mut data = TableData::new("fact_ventas", COLUMNS);
    if num_rows == 0 {
        return Ok(data);
    }
    if store_keys.is_empty() {
        bail!("cannot build fact_ventas: no store keys available");
    }
    if products.is_empty() {
        bail!("cannot build fact_ventas: no product keys available");
    }

    data.rows.reserve(num_rows);
    for venta_sk in 1..=num_rows as i64 {
        let fecha_sk = fake.pick(date_keys);
        let tienda_sk = fake.pick(store_keys);
        let (producto_sk, precio_unitario) = fake.pick(products);
        let cantidad = fake.int_range(1, 4);
        let monto_total = cantidad as f64 * precio_unitario;

        data.rows.push(vec![
            SqlValue::Int(venta_sk),
            SqlValue::Int(fecha_sk),
            SqlValue::Int(tienda_sk),
            SqlValue::Int(producto_sk),
            SqlValue::Int(cantidad),
            SqlValue::Float(monto_total),
            SqlValue::Str(fake.token(12)),
            SqlValue::Str(loaded_at.to_string()),
            SqlValue::Str(PROCESO_ORIGEN.to_string()),
        ]);
    }
    Ok(data)
}
