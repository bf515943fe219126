//! Date dimension builder.
//!
//! One row per calendar day in an inclusive year range, with all attributes
//! derived deterministically from the date. No randomness.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::table::{SqlValue, TableData};

/// Fixed (month, day) holiday patterns, applied to every year in range
pub const HOLIDAYS: &[(u32, u32)] = &[(1, 1), (5, 1), (9, 16), (11, 20), (12, 25)];

pub const COLUMNS: &[&str] = &[
    "fecha_sk",
    "fecha_completa",
    "anio",
    "trimestre",
    "mes",
    "nombre_mes",
    "dia",
    "dia_semana",
    "es_fin_de_semana",
    "es_feriado",
];

/// Surrogate key for a calendar date: the `YYYYMMDD` encoding
pub fn date_sk(date: NaiveDate) -> i64 {
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

/// Build one row per day in `[Jan 1 start_year, Dec 31 end_year]`
pub fn build(start_year: i32, end_year: i32) -> Result<TableData> {
    if start_year > end_year {
        bail!("invalid year range: {start_year} > {end_year}");
    }
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .with_context(|| format!("start year out of range: {start_year}"))?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .with_context(|| format!("end year out of range: {end_year}"))?;

    let mut data = TableData::new("dim_fecha", COLUMNS);
    for date in start.iter_days().take_while(|d| *d <= end) {
        let quarter = (date.month0() / 3 + 1) as i64;
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let holiday = HOLIDAYS.contains(&(date.month(), date.day()));

        data.rows.push(vec![
            SqlValue::Int(date_sk(date)),
            SqlValue::Str(date.format("%Y-%m-%d").to_string()),
            SqlValue::Int(date.year() as i64),
            SqlValue::Int(quarter),
            SqlValue::Int(date.month() as i64),
            SqlValue::Str(date.format("%B").to_string()),
            SqlValue::Int(date.day() as i64),
            SqlValue::Str(date.format("%A").to_string()),
            SqlValue::Bool(weekend),
            SqlValue::Bool(holiday),
        ]);
    }
    Ok(data)
}

/// Surrogate keys for every row of a built date dimension
pub fn surrogate_keys(data: &TableData) -> Vec<i64> {
    data.rows
        .iter()
        .filter_map(|r| match r.first() {
            Some(SqlValue::Int(sk)) => Some(*sk),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_row_count() {
        let data = build(2020, 2020).unwrap();
        assert_eq!(data.row_count(), 366);
    }

    #[test]
    fn test_surrogate_key_bounds() {
        let data = build(2020, 2020).unwrap();
        let keys = surrogate_keys(&data);
        assert_eq!(keys.first(), Some(&20200101));
        assert_eq!(keys.last(), Some(&20201231));
    }

    #[test]
    fn test_holiday_count_per_year() {
        let data = build(2019, 2021).unwrap();
        let holiday_idx = data.column_index("es_feriado").unwrap();
        let holidays = data
            .rows
            .iter()
            .filter(|r| r[holiday_idx] == SqlValue::Bool(true))
            .count();
        assert_eq!(holidays, 5 * 3);
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(build(2022, 2020).is_err());
    }

    #[test]
    fn test_quarter_derivation() {
        let data = build(2023, 2023).unwrap();
        let quarter_idx = data.column_index("trimestre").unwrap();
        // Jan 1 is Q1, Dec 31 is Q4
        assert_eq!(data.rows[0][quarter_idx], SqlValue::Int(1));
        assert_eq!(data.rows[364][quarter_idx], SqlValue::Int(4));
    }

    #[test]
    fn test_weekend_flag() {
        // 2023-01-07 was a Saturday
        let data = build(2023, 2023).unwrap();
        let weekend_idx = data.column_index("es_fin_de_semana").unwrap();
        let day_idx = data.column_index("dia_semana").unwrap();
        assert_eq!(data.rows[6][weekend_idx], SqlValue::Bool(true));
        assert_eq!(data.rows[6][day_idx], SqlValue::Str("Saturday".to_string()));
    }

    #[test]
    fn test_date_sk_is_injective_across_range() {
        let data = build(2020, 2021).unwrap();
        let mut keys = surrogate_keys(&data);
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
