use crate::constants::{
    COMMODITY_FAMILY, EXCLUDED_DETAIL_TERMS, EXCLUDED_REGIME, EXCLUDED_YEARS, MIN_AMOUNT,
    PROCESS_STATUS, PROCESS_TYPES, ROW_LIMIT, SELECT_FIELDS,
};

/// Quotes a SoQL string literal, doubling embedded single quotes.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quoted_list(values: &[&str]) -> String {
    values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
}

fn select_clause() -> String {
    SELECT_FIELDS
        .iter()
        .map(|(expr, name)| {
            if expr == name {
                (*name).to_string()
            } else {
                format!("{expr} AS {name}")
            }
        })
        .collect::<Vec<_>>()
        .join(",\n    ")
}

fn where_clauses() -> Vec<String> {
    let mut clauses = vec![
        "anno_firma IS NOT NULL".to_string(),
        "fecha_fima IS NOT NULL".to_string(),
        "detalle_objeto IS NOT NULL".to_string(),
        format!("id_familia = {}", quote(COMMODITY_FAMILY)),
        format!("estado_del_proceso = {}", quote(PROCESS_STATUS)),
        format!("anno_firma NOT IN ({})", quoted_list(EXCLUDED_YEARS)),
        format!("cuantia_proceso > {MIN_AMOUNT}"),
        format!("cuantia_contrato > {MIN_AMOUNT}"),
        format!("regimen_de_contratacion != {}", quote(EXCLUDED_REGIME)),
        format!("tipo_de_proceso IN ({})", quoted_list(PROCESS_TYPES)),
    ];
    clauses.extend(
        EXCLUDED_DETAIL_TERMS
            .iter()
            .map(|term| format!("detalle_objeto NOT LIKE {}", quote(&format!("%{term}%")))),
    );
    clauses
}

/// Builds the fixed SoQL query used to extract the contract population.
///
/// The predicate is not parameterized: column projection, filters, the
/// object-detail exclusions and the row cap are all compile-time constants.
pub fn build_query() -> String {
    format!(
        "SELECT\n    {}\nWHERE\n    {}\nLIMIT {ROW_LIMIT}",
        select_clause(),
        where_clauses().join("\n    AND ")
    )
}
