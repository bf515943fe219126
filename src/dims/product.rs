//! Product dimension builder.

use rand::Rng;

use crate::fake::SyntheticData;
use crate::table::{SqlValue, TableData};

/// Product categories
pub const CATEGORIAS: &[&str] = &["Electrónica", "Hogar", "Ropa", "Alimentos", "Juguetes"];

/// Unit price bounds, exclusive
pub const PRECIO_MIN: f64 = 10.0;
pub const PRECIO_MAX: f64 = 5000.0;

pub const COLUMNS: &[&str] = &[
    "nombre_producto",
    "marca",
    "categoria",
    "subcategoria",
    "precio_unitario",
];

/// Build `count` synthetic product rows. The subcategory is derived from
/// the sampled category as `categoria_Word`.
pub fn build<R: Rng>(fake: &mut SyntheticData<R>, count: usize) -> TableData {
    let mut data = TableData::new("dim_producto", COLUMNS);
    for _ in 0..count {
        let categoria = fake.choice(CATEGORIAS);
        data.rows.push(vec![
            SqlValue::Str(format!(
                "{} {}",
                fake.capitalized_word(),
                fake.capitalized_word()
            )),
            SqlValue::Str(fake.company()),
            SqlValue::Str(categoria.to_string()),
            SqlValue::Str(format!("{}_{}", categoria, fake.capitalized_word())),
            SqlValue::Float(fake.price(PRECIO_MIN, PRECIO_MAX)),
        ]);
    }
    data
}

/// Unit prices for every row of a built product dimension
pub fn unit_prices(data: &TableData) -> Vec<f64> {
    let idx = data.column_index("precio_unitario");
    data.rows
        .iter()
        .filter_map(|r| match idx.and_then(|i| r.get(i)) {
            Some(SqlValue::Float(p)) => Some(*p),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        let mut fake = SyntheticData::seeded(42);
        assert_eq!(build(&mut fake, 40).row_count(), 40);
        assert_eq!(build(&mut fake, 0).row_count(), 0);
    }

    #[test]
    fn test_categories_come_from_enumeration() {
        let mut fake = SyntheticData::seeded(42);
        let data = build(&mut fake, 50);
        let cat_idx = data.column_index("categoria").unwrap();
        for row in &data.rows {
            match &row[cat_idx] {
                SqlValue::Str(c) => assert!(CATEGORIAS.contains(&c.as_str())),
                other => panic!("unexpected categoria value: {other:?}"),
            }
        }
    }

    #[test]
    fn test_subcategory_derives_from_category() {
        let mut fake = SyntheticData::seeded(42);
        let data = build(&mut fake, 30);
        let cat_idx = data.column_index("categoria").unwrap();
        let sub_idx = data.column_index("subcategoria").unwrap();
        for row in &data.rows {
            let (SqlValue::Str(cat), SqlValue::Str(sub)) = (&row[cat_idx], &row[sub_idx]) else {
                panic!("unexpected row shape");
            };
            assert!(sub.starts_with(&format!("{cat}_")));
        }
    }

    #[test]
    fn test_prices_are_in_range() {
        let mut fake = SyntheticData::seeded(42);
        let data = build(&mut fake, 100);
        for price in unit_prices(&data) {
            assert!(price >= PRECIO_MIN && price <= PRECIO_MAX);
        }
    }
}
