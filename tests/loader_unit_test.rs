//! Unit tests for the batched INSERT generation, via the public lib API.

use star_seeder::dims::store;
use star_seeder::fake::SyntheticData;
use star_seeder::loader::batch_insert_sql;
use star_seeder::schema;

#[test]
fn test_batches_split_at_batch_size() {
    let mut fake = SyntheticData::seeded(42);
    let data = store::build(&mut fake, 2500);

    let batch_size = 1000;
    let statements: Vec<String> = data
        .rows
        .chunks(batch_size)
        .map(|chunk| batch_insert_sql(&data.table, &data.columns, chunk))
        .collect();

    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0].matches("),\n(").count(), 999);
    assert_eq!(statements[2].matches("),\n(").count(), 499);
    for sql in &statements {
        assert!(sql.starts_with("INSERT INTO \"dim_tienda\""));
    }
}

#[test]
fn test_insert_never_includes_serial_key_column() {
    let mut fake = SyntheticData::seeded(42);
    let data = store::build(&mut fake, 2);
    let sql = batch_insert_sql(&data.table, &data.columns, &data.rows);
    // tienda_sk is assigned by the datastore, so the INSERT must not name it
    assert!(!sql.contains("tienda_sk"));
    assert!(sql.contains("\"nombre_tienda\""));
}

#[test]
fn test_schema_ddl_matches_generated_columns() {
    let mut fake = SyntheticData::seeded(42);
    let data = store::build(&mut fake, 1);
    let table = schema::table("dim_tienda").unwrap();
    let ddl_columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
    // Every generated column must exist in the bootstrap DDL
    for col in &data.columns {
        assert!(ddl_columns.contains(&col.as_str()), "missing column {col}");
    }
}
