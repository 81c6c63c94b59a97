use super::client::Record;
use crate::constants::SELECT_FIELDS;
use crate::errors::AppResult;
use polars::prelude::*;
use serde_json::Value;

/// Renders a JSON scalar as cell text. Nested values keep their JSON form.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Materializes Socrata rows as a raw contract table.
///
/// Columns are exactly the query projection, in query order, all typed as
/// nullable strings. Socrata leaves null fields out of each row object, so a
/// missing key becomes a null cell. An empty record set yields a zero-row
/// table with the full schema.
pub fn records_to_table(records: &[Record]) -> AppResult<DataFrame> {
    let columns = SELECT_FIELDS
        .iter()
        .map(|(_, name)| {
            let cells: Vec<Option<String>> = records
                .iter()
                .map(|record| record.get(*name).and_then(cell_text))
                .collect();
            Series::new(name, cells)
        })
        .collect::<Vec<_>>();

    Ok(DataFrame::new(columns)?)
}
