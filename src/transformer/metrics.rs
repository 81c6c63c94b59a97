use super::{as_days, column, require_columns};
use crate::constants::{
    ADDITIONAL_TIME, AWARD_GROWTH, CONTRACT_VALUE, COST_DEVIATION, ESTIMATED_COST, FINAL_COST,
    FINAL_DEADLINE, ORIGINAL_DEADLINE, PROJECT_INTENSITY, TIME_DEVIATION,
};
use crate::errors::{AppError, AppResult};
use polars::prelude::*;

/// Columns used as ratio denominators by [`derive_metrics`].
const DENOMINATORS: &[&str] = &[ORIGINAL_DEADLINE, ESTIMATED_COST, CONTRACT_VALUE];

/// Fails with the first row holding an exact zero in `name`.
fn ensure_nonzero(df: &DataFrame, name: &str) -> AppResult<()> {
    let values = column(df, name)?.cast(&DataType::Float64)?;
    let zero = values.f64()?.into_iter().position(|v| v == Some(0.0));
    match zero {
        Some(row) => Err(AppError::ZeroDenominator {
            column: name.to_string(),
            row,
        }),
        None => Ok(()),
    }
}

fn as_float(name: &str) -> Expr {
    col(name).cast(DataType::Float64)
}

/// Adds FINAL_DEADLINE, PROJECT_INTENSITY, AWARD_GROWTH, COST_DEVIATION and
/// TIME_DEVIATION, in that order.
///
/// Expects normalized monetary columns and day-based durations. A zero in any
/// denominator rejects the whole table, which is then left untouched.
pub fn derive_metrics(df: &mut DataFrame) -> AppResult<()> {
    require_columns(
        df,
        &[
            ORIGINAL_DEADLINE,
            ADDITIONAL_TIME,
            ESTIMATED_COST,
            CONTRACT_VALUE,
            FINAL_COST,
        ],
    )?;
    for name in DENOMINATORS {
        ensure_nonzero(df, name)?;
    }

    let derived = df
        .clone()
        .lazy()
        .with_column(
            (as_days(ORIGINAL_DEADLINE) + as_days(ADDITIONAL_TIME)).alias(FINAL_DEADLINE),
        )
        .with_columns([
            (col(CONTRACT_VALUE) / as_float(ORIGINAL_DEADLINE)).alias(PROJECT_INTENSITY),
            ((col(CONTRACT_VALUE) - col(ESTIMATED_COST)) / col(ESTIMATED_COST) * lit(100.0))
                .alias(AWARD_GROWTH),
            ((col(FINAL_COST) - col(CONTRACT_VALUE)) / col(CONTRACT_VALUE)).alias(COST_DEVIATION),
            ((as_float(FINAL_DEADLINE) - as_float(ORIGINAL_DEADLINE))
                / as_float(ORIGINAL_DEADLINE))
            .alias(TIME_DEVIATION),
        ])
        .collect()?;

    *df = derived;
    Ok(())
}
