//! Batched append-only loader for the shared PostgreSQL connection.
//!
//! Rows are written as multi-row INSERT statements in fixed-size batches.
//! Existing data is never truncated or replaced, and batches already
//! committed before a failure are not rolled back.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use postgres::Client;

use crate::schema::Table;
use crate::table::{Row, TableData};

/// Rows per INSERT statement
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Generate one multi-row INSERT statement for a batch
pub fn batch_insert_sql(table: &str, columns: &[String], rows: &[Row]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut sql = format!("INSERT INTO \"{}\"", table);
    sql.push_str(" (");
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('"');
        sql.push_str(col);
        sql.push('"');
    }
    sql.push(')');

    sql.push_str(" VALUES\n");
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(",\n");
        }
        sql.push('(');
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&value.to_postgres());
        }
        sql.push(')');
    }
    sql.push(';');

    sql
}

/// Appends generated tables to the datastore over one shared connection
pub struct Loader<'a> {
    client: &'a mut Client,
    batch_size: usize,
    progress: bool,
}

impl<'a> Loader<'a> {
    pub fn new(client: &'a mut Client) -> Self {
        Self {
            client,
            batch_size: DEFAULT_BATCH_SIZE,
            progress: false,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Create the destination table when it does not already exist
    pub fn ensure_table(&mut self, table: &Table) -> Result<()> {
        self.client
            .batch_execute(&table.create_ddl())
            .with_context(|| format!("failed to create table {}", table.name))
    }

    /// Append all rows of `data` to its destination table in batches.
    ///
    /// Returns the number of rows written. A failing batch aborts the
    /// append; earlier batches stay committed.
    pub fn append(&mut self, data: &TableData) -> Result<u64> {
        println!("Loading table {}...", data.table);
        if data.rows.is_empty() {
            println!("-> 0 rows appended to {}", data.table);
            return Ok(0);
        }

        let progress_bar = if self.progress {
            let pb = ProgressBar::new(data.rows.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut written = 0u64;
        for chunk in data.rows.chunks(self.batch_size) {
            let sql = batch_insert_sql(&data.table, &data.columns, chunk);
            self.client.batch_execute(&sql).with_context(|| {
                format!(
                    "failed to append batch to {} after {} rows",
                    data.table, written
                )
            })?;
            written += chunk.len() as u64;
            if let Some(ref pb) = progress_bar {
                pb.set_position(written);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }
        println!("-> {} rows appended to {}", written, data.table);
        Ok(written)
    }

    /// Re-read the store keys assigned by the datastore on insert.
    ///
    /// Casts keep the client-side type stable regardless of how the
    /// pre-existing table declared its serial column.
    pub fn fetch_store_keys(&mut self) -> Result<Vec<i64>> {
        let rows = self
            .client
            .query(
                "SELECT tienda_sk::bigint FROM dim_tienda ORDER BY tienda_sk",
                &[],
            )
            .context("failed to re-read dim_tienda")?;
        Ok(rows.iter().map(|r| r.get(0)).collect())
    }

    /// Re-read product keys and unit prices assigned/stored on insert
    pub fn fetch_product_prices(&mut self) -> Result<Vec<(i64, f64)>> {
        let rows = self
            .client
            .query(
                "SELECT producto_sk::bigint, precio_unitario::float8 \
                 FROM dim_producto ORDER BY producto_sk",
                &[],
            )
            .context("failed to re-read dim_producto")?;
        Ok(rows.iter().map(|r| (r.get(0), r.get(1))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SqlValue;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_batch_insert_sql_shape() {
        let rows = vec![
            vec![SqlValue::Int(1), SqlValue::Str("Tienda_Norte".to_string())],
            vec![SqlValue::Int(2), SqlValue::Str("Tienda_Sur".to_string())],
        ];
        let sql = batch_insert_sql("dim_tienda", &columns(&["tienda_sk", "nombre_tienda"]), &rows);
        assert!(sql.starts_with("INSERT INTO \"dim_tienda\" (\"tienda_sk\", \"nombre_tienda\") VALUES"));
        assert!(sql.contains("(1, 'Tienda_Norte')"));
        assert!(sql.contains("(2, 'Tienda_Sur')"));
        assert!(sql.ends_with(';'));
    }

    #[test]
    fn test_batch_insert_sql_escapes_quotes() {
        let rows = vec![vec![SqlValue::Str("O'Higgins".to_string())]];
        let sql = batch_insert_sql("dim_tienda", &columns(&["ciudad"]), &rows);
        assert!(sql.contains("('O''Higgins')"));
    }

    #[test]
    fn test_batch_insert_sql_empty_rows() {
        let sql = batch_insert_sql("dim_tienda", &columns(&["ciudad"]), &[]);
        assert!(sql.is_empty());
    }

    #[test]
    fn test_batch_insert_sql_renders_every_value_kind() {
        let rows = vec![vec![
            SqlValue::Int(20200101),
            SqlValue::Float(12.5),
            SqlValue::Bool(false),
            SqlValue::Null,
        ]];
        let sql = batch_insert_sql(
            "dim_fecha",
            &columns(&["fecha_sk", "precio", "es_feriado", "extra"]),
            &rows,
        );
        assert!(sql.contains("(20200101, 12.50, FALSE, NULL)"));
    }
}
