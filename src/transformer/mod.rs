//! Reshaping of the raw contract table into the analysis-ready table.
//!
//! [`process_data`] runs every step in order; each step is also exposed so it can be
//! applied to a partially prepared table.

mod coercion;
mod metrics;
mod normalize;
mod recode;

// Re-export public API
pub use coercion::{coerce_types, rename_columns};
pub use metrics::derive_metrics;
pub use normalize::{minimum_wage, normalize_currency, normalize_deadline, unify_additional_time};
pub use recode::{
    assign_region, recode_owner, uppercase_text, Recoding, MUNICIPALITY_TYPE_RECODING,
    OWNER_RECODING,
};

use crate::errors::{AppError, AppResult};
use polars::prelude::*;
use tracing::{debug, info};

/// Looks up a column, reporting its absence as [`AppError::MissingColumn`].
pub(crate) fn column<'a>(df: &'a DataFrame, name: &str) -> AppResult<&'a Series> {
    df.column(name)
        .map_err(|_| AppError::MissingColumn(name.to_string()))
}

/// Day counts as `Int64`, wide enough for a month count times 30.
pub(crate) fn as_days(name: &str) -> Expr {
    col(name).strict_cast(DataType::Int64)
}

pub(crate) fn require_columns(df: &DataFrame, names: &[&str]) -> AppResult<()> {
    for name in names {
        column(df, name)?;
    }
    Ok(())
}

/// Produces the analysis-ready contract table from a raw extraction.
///
/// # Workflow
///
/// 1. Coerces monetary, count and date columns to typed columns
/// 2. Renames source columns to their published names
/// 3. Expresses monetary values in minimum wages of the signature year
/// 4. Converts the planned duration to days and drops the unit flag
/// 5. Folds additional days and months into ADDITIONAL_TIME
/// 6. Derives deadline, intensity, growth and deviation metrics
/// 7. Recodes the entity order into OWNER and MUNICIPALITY_TYPE
/// 8. Assigns REGION from the department
/// 9. Upper-cases the free-text columns
///
/// Rows are neither added nor dropped.
///
/// # Errors
///
/// The first failing step aborts the whole table: a value that does not coerce, a
/// signature year without a minimum wage, a zero ratio denominator, or a missing
/// column.
pub fn process_data(mut df: DataFrame) -> AppResult<DataFrame> {
    let rows = df.height();

    coerce_types(&mut df)?;
    rename_columns(&mut df)?;
    normalize_currency(&mut df)?;
    debug!("Monetary values normalized to minimum wages");

    normalize_deadline(&mut df)?;
    unify_additional_time(&mut df)?;
    derive_metrics(&mut df)?;
    debug!("Duration and cost metrics derived");

    recode_owner(&mut df)?;
    assign_region(&mut df)?;
    uppercase_text(&mut df)?;

    info!(rows = rows, columns = df.width(), "Contracts processed");
    Ok(df)
}
