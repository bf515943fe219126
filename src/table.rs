//! In-memory representation of generated tabular data.
//!
//! Builders produce a `TableData` per destination table; the loader turns
//! it into batched INSERT statements.

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl SqlValue {
    /// Format as a PostgreSQL literal
    pub fn to_postgres(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Float(n) => format!("{:.2}", n),
            SqlValue::Str(s) => format!("'{}'", escape_postgres_string(s)),
            SqlValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

fn escape_postgres_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// A row of generated data
pub type Row = Vec<SqlValue>;

/// Generated data for a single destination table
#[derive(Debug, Clone)]
pub struct TableData {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(table: &str, columns: &[&str]) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_literals() {
        assert_eq!(SqlValue::Null.to_postgres(), "NULL");
        assert_eq!(SqlValue::Int(20200101).to_postgres(), "20200101");
        assert_eq!(SqlValue::Float(49.9).to_postgres(), "49.90");
        assert_eq!(SqlValue::Bool(true).to_postgres(), "TRUE");
        assert_eq!(SqlValue::Bool(false).to_postgres(), "FALSE");
    }

    #[test]
    fn test_string_escaping() {
        let v = SqlValue::Str("Tienda_O'Higgins".to_string());
        assert_eq!(v.to_postgres(), "'Tienda_O''Higgins'");
    }

    #[test]
    fn test_column_index() {
        let data = TableData::new("dim_tienda", &["nombre_tienda", "formato"]);
        assert_eq!(data.column_index("formato"), Some(1));
        assert_eq!(data.column_index("tienda_sk"), None);
    }
}
