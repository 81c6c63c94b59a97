use super::column;
use crate::constants::{
    DEPARTMENT, ENTITY_ORDERS, MUNICIPALITY_TYPE, MUNICIPALITY_TYPES, OWNER, OWNERS, REGION,
    UPPERCASE_COLUMNS,
};
use crate::errors::AppResult;
use crate::models::Region;
use polars::prelude::*;

/// Positional substitution table: `from[i]` is replaced by `to[i]`.
pub struct Recoding {
    from: &'static [&'static str; 10],
    to: &'static [&'static str; 10],
}

impl Recoding {
    /// Returns the substitute for `value`, or `value` itself when it is not in the domain.
    pub fn apply<'a>(&self, value: &'a str) -> &'a str {
        match self.from.iter().position(|candidate| *candidate == value) {
            Some(i) => self.to[i],
            None => value,
        }
    }
}

pub const MUNICIPALITY_TYPE_RECODING: Recoding = Recoding {
    from: &ENTITY_ORDERS,
    to: &MUNICIPALITY_TYPES,
};

pub const OWNER_RECODING: Recoding = Recoding {
    from: &ENTITY_ORDERS,
    to: &OWNERS,
};

fn map_strings<F>(df: &DataFrame, name: &str, f: F) -> AppResult<Vec<Option<String>>>
where
    F: Fn(&str) -> String,
{
    Ok(column(df, name)?
        .str()?
        .into_iter()
        .map(|cell| cell.map(&f))
        .collect())
}

/// Adds OWNER from the entity order and recodes MUNICIPALITY_TYPE in place.
///
/// Both use the same ten-value source domain; other values pass through unchanged.
pub fn recode_owner(df: &mut DataFrame) -> AppResult<()> {
    let owner = map_strings(df, MUNICIPALITY_TYPE, |v| OWNER_RECODING.apply(v).to_string())?;
    let municipality_type = map_strings(df, MUNICIPALITY_TYPE, |v| {
        MUNICIPALITY_TYPE_RECODING.apply(v).to_string()
    })?;

    df.with_column(Series::new(MUNICIPALITY_TYPE, municipality_type))?;
    df.with_column(Series::new(OWNER, owner))?;
    Ok(())
}

/// Adds REGION from DEPARTMENT. Null departments fall in the default bucket.
pub fn assign_region(df: &mut DataFrame) -> AppResult<()> {
    let regions: Vec<&str> = column(df, DEPARTMENT)?
        .str()?
        .into_iter()
        .map(|cell| cell.map_or(Region::Otra, Region::from_department).as_str())
        .collect();

    df.with_column(Series::new(REGION, regions))?;
    Ok(())
}

/// Upper-cases the free-text columns used for grouping.
pub fn uppercase_text(df: &mut DataFrame) -> AppResult<()> {
    for name in UPPERCASE_COLUMNS {
        let upper = map_strings(df, name, str::to_uppercase)?;
        df.with_column(Series::new(name, upper))?;
    }
    Ok(())
}
