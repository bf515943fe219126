//! Store dimension builder.

use rand::Rng;

use crate::fake::SyntheticData;
use crate::table::{SqlValue, TableData};

/// Store formats
pub const FORMATOS: &[&str] = &[
    "Supermercado",
    "Hipermercado",
    "Express",
    "Tienda de Barrio",
    "Conveniencia",
    "Outlet",
    "Especializada",
];

pub const COLUMNS: &[&str] = &["nombre_tienda", "formato", "ciudad", "estado"];

/// Build `count` synthetic store rows. Duplicate names are acceptable; the
/// surrogate key is assigned by the datastore on insert and never appears
/// in the generated rows.
pub fn build<R: Rng>(fake: &mut SyntheticData<R>, count: usize) -> TableData {
    let mut data = TableData::new("dim_tienda", COLUMNS);
    for _ in 0..count {
        data.rows.push(vec![
            SqlValue::Str(format!("Tienda_{}", fake.city())),
            SqlValue::Str(fake.choice(FORMATOS).to_string()),
            SqlValue::Str(fake.city()),
            SqlValue::Str(fake.state()),
        ]);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        let mut fake = SyntheticData::seeded(42);
        assert_eq!(build(&mut fake, 25).row_count(), 25);
        assert_eq!(build(&mut fake, 0).row_count(), 0);
    }

    #[test]
    fn test_formats_come_from_enumeration() {
        let mut fake = SyntheticData::seeded(42);
        let data = build(&mut fake, 50);
        let formato_idx = data.column_index("formato").unwrap();
        for row in &data.rows {
            match &row[formato_idx] {
                SqlValue::Str(f) => assert!(FORMATOS.contains(&f.as_str())),
                other => panic!("unexpected formato value: {other:?}"),
            }
        }
    }

    #[test]
    fn test_store_name_prefix() {
        let mut fake = SyntheticData::seeded(42);
        let data = build(&mut fake, 5);
        for row in &data.rows {
            match &row[0] {
                SqlValue::Str(name) => assert!(name.starts_with("Tienda_")),
                other => panic!("unexpected name value: {other:?}"),
            }
        }
    }
}
