use super::column;
use crate::constants::{
    COLUMN_RENAMES, DATE_RAW_COLUMNS, INTEGER_RAW_COLUMNS, MONETARY_RAW_COLUMNS,
};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use tracing::debug;

/// Timestamp layouts Socrata uses for floating timestamps.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

fn parse_int(text: &str) -> Option<i32> {
    text.parse::<i32>().ok()
}

/// Accepts plain dates and floating timestamps; the time of day is discarded.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
}

/// Parses every non-null cell of a text column, failing on the first bad value.
fn coerce_cells<T, F>(df: &DataFrame, name: &str, parse: F) -> AppResult<Vec<Option<T>>>
where
    F: Fn(&str) -> Option<T>,
{
    let cells = column(df, name)?.str()?;
    cells
        .into_iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            None => Ok(None),
            Some(text) => parse(text.trim()).map(Some).ok_or_else(|| AppError::Conversion {
                column: name.to_string(),
                row,
                value: text.to_string(),
            }),
        })
        .collect()
}

/// Casts the raw text columns to their analysis types.
///
/// Monetary columns become `Float64`, year and duration counts `Int32`, and the
/// three date columns `Date`. Nulls are kept. The whole table is rejected on the
/// first value that does not parse; nothing is coerced partially.
pub fn coerce_types(df: &mut DataFrame) -> AppResult<()> {
    for name in MONETARY_RAW_COLUMNS {
        let values = coerce_cells(df, name, parse_float)?;
        df.with_column(Series::new(name, values))?;
    }
    for name in INTEGER_RAW_COLUMNS {
        let values = coerce_cells(df, name, parse_int)?;
        df.with_column(Series::new(name, values))?;
    }
    for name in DATE_RAW_COLUMNS {
        let values = coerce_cells(df, name, parse_date)?;
        df.with_column(Series::new(name, values))?;
    }

    debug!(rows = df.height(), "Column types coerced");
    Ok(())
}

/// Applies the source → target rename table. Source columns that are not
/// present are skipped.
pub fn rename_columns(df: &mut DataFrame) -> AppResult<()> {
    for (from, to) in COLUMN_RENAMES {
        if df.get_column_index(from).is_some() {
            df.rename(from, to)?;
        }
    }
    Ok(())
}
