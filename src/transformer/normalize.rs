use super::{as_days, column, require_columns};
use crate::constants::{
    ADDITIONAL_TIME, COL_ADDED_DAYS, COL_ADDED_MONTHS, COL_DURATION_UNIT, DAYS_PER_MONTH,
    MINIMUM_WAGE, MONETARY_COLUMNS, MONTHS_UNIT, ORIGINAL_DEADLINE, YEAR,
};
use crate::errors::{AppError, AppResult};
use polars::prelude::*;

/// Monthly legal minimum wage for a signature year, if the year is covered.
pub fn minimum_wage(year: i32) -> Option<f64> {
    MINIMUM_WAGE
        .iter()
        .find(|(covered, _)| *covered == year)
        .map(|(_, wage)| *wage)
}

/// Expresses the four monetary columns in minimum wages of each row's YEAR.
///
/// A null YEAR or a year outside the wage table rejects the whole table.
pub fn normalize_currency(df: &mut DataFrame) -> AppResult<()> {
    let wages = column(df, YEAR)?
        .i32()?
        .into_iter()
        .enumerate()
        .map(|(row, year)| {
            year.and_then(minimum_wage).ok_or_else(|| AppError::UnknownYear {
                row,
                year: year.map_or_else(|| "null".to_string(), |y| y.to_string()),
            })
        })
        .collect::<AppResult<Vec<f64>>>()?;

    for name in MONETARY_COLUMNS {
        let scaled: Vec<Option<f64>> = column(df, name)?
            .f64()?
            .into_iter()
            .zip(&wages)
            .map(|(value, wage)| value.map(|v| v / wage))
            .collect();
        df.with_column(Series::new(name, scaled))?;
    }
    Ok(())
}

/// Converts ORIGINAL_DEADLINE to days where the unit flag marks months, then
/// drops the unit flag. The table is left untouched on error.
pub fn normalize_deadline(df: &mut DataFrame) -> AppResult<()> {
    require_columns(df, &[ORIGINAL_DEADLINE, COL_DURATION_UNIT])?;

    let normalized = df
        .clone()
        .lazy()
        .with_column(
            when(col(COL_DURATION_UNIT).eq(lit(MONTHS_UNIT)))
                .then(as_days(ORIGINAL_DEADLINE) * lit(DAYS_PER_MONTH))
                .otherwise(as_days(ORIGINAL_DEADLINE))
                .alias(ORIGINAL_DEADLINE),
        )
        .collect()?
        .drop(COL_DURATION_UNIT)?;

    *df = normalized;
    Ok(())
}

/// Folds the additional days and months into a single ADDITIONAL_TIME in days,
/// then drops both source columns. The table is left untouched on error.
pub fn unify_additional_time(df: &mut DataFrame) -> AppResult<()> {
    require_columns(df, &[COL_ADDED_DAYS, COL_ADDED_MONTHS])?;

    let unified = df
        .clone()
        .lazy()
        .with_column(
            (as_days(COL_ADDED_DAYS) + as_days(COL_ADDED_MONTHS) * lit(DAYS_PER_MONTH))
                .alias(ADDITIONAL_TIME),
        )
        .collect()?
        .drop(COL_ADDED_DAYS)?
        .drop(COL_ADDED_MONTHS)?;

    *df = unified;
    Ok(())
}
