//! Destination table definitions for the retail star schema.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS` so the loader can
//! bootstrap a missing destination before appending. No table carries a
//! primary-key or unique constraint: re-running the pipeline appends to the
//! dimensions, and fact surrogate keys are only unique within one run.

/// SQL data types used by the star schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlType {
    /// Auto-incrementing 64-bit integer (datastore-assigned surrogate keys)
    BigSerial,
    BigInt,
    Integer,
    VarChar(u16),
    Numeric(u8, u8),
    Boolean,
    Date,
    Timestamp,
}

impl SqlType {
    pub fn to_postgres(&self) -> String {
        match self {
            SqlType::BigSerial => "BIGSERIAL".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::VarChar(n) => format!("VARCHAR({})", n),
            SqlType::Numeric(p, s) => format!("NUMERIC({},{})", p, s),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Date => "DATE".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub not_null: bool,
}

/// Table definition
#[derive(Debug, Clone)]
pub struct Table {
    pub name: &'static str,
    pub columns: Vec<Column>,
}

impl Table {
    /// Render the bootstrap DDL for this table
    pub fn create_ddl(&self) -> String {
        let cols: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("    \"{}\" {}", c.name, c.sql_type.to_postgres());
                if c.not_null {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (\n{}\n);",
            self.name,
            cols.join(",\n")
        )
    }
}

fn col(name: &'static str, sql_type: SqlType) -> Column {
    Column {
        name,
        sql_type,
        not_null: false,
    }
}

fn key(name: &'static str, sql_type: SqlType) -> Column {
    Column {
        name,
        sql_type,
        not_null: true,
    }
}

/// The five destination tables, in load order
pub fn star_schema() -> Vec<Table> {
    vec![
        Table {
            name: "dim_fecha",
            columns: vec![
                key("fecha_sk", SqlType::BigInt),
                col("fecha_completa", SqlType::Date),
                col("anio", SqlType::Integer),
                col("trimestre", SqlType::Integer),
                col("mes", SqlType::Integer),
                col("nombre_mes", SqlType::VarChar(20)),
                col("dia", SqlType::Integer),
                col("dia_semana", SqlType::VarChar(20)),
                col("es_fin_de_semana", SqlType::Boolean),
                col("es_feriado", SqlType::Boolean),
            ],
        },
        Table {
            name: "dim_tienda",
            columns: vec![
                key("tienda_sk", SqlType::BigSerial),
                col("nombre_tienda", SqlType::VarChar(120)),
                col("formato", SqlType::VarChar(40)),
                col("ciudad", SqlType::VarChar(80)),
                col("estado", SqlType::VarChar(80)),
            ],
        },
        Table {
            name: "dim_producto",
            columns: vec![
                key("producto_sk", SqlType::BigSerial),
                col("nombre_producto", SqlType::VarChar(120)),
                col("marca", SqlType::VarChar(120)),
                col("categoria", SqlType::VarChar(40)),
                col("subcategoria", SqlType::VarChar(80)),
                col("precio_unitario", SqlType::Numeric(10, 2)),
            ],
        },
        Table {
            name: "fact_ventas",
            columns: vec![
                key("venta_sk", SqlType::BigInt),
                col("fecha_sk", SqlType::BigInt),
                col("tienda_sk", SqlType::BigInt),
                col("producto_sk", SqlType::BigInt),
                col("cantidad", SqlType::Integer),
                col("monto_total", SqlType::Numeric(12, 2)),
                col("ticket_id", SqlType::VarChar(12)),
                col("fecha_carga", SqlType::Timestamp),
                col("proceso_origen", SqlType::VarChar(50)),
            ],
        },
        Table {
            name: "fact_inventario",
            columns: vec![
                key("inventario_sk", SqlType::BigInt),
                col("tienda_sk", SqlType::BigInt),
                col("producto_sk", SqlType::BigInt),
                col("fecha_sk", SqlType::BigInt),
                col("stock_disponible", SqlType::Integer),
                col("stock_actual", SqlType::Integer),
                col("stock_minimo", SqlType::Integer),
                col("dias_stock_restante", SqlType::Integer),
                col("fecha_carga", SqlType::Timestamp),
                col("proceso_origen", SqlType::VarChar(50)),
            ],
        },
    ]
}

/// Look up a destination table definition by name
pub fn table(name: &str) -> Option<Table> {
    star_schema().into_iter().find(|t| t.name == name)
}
