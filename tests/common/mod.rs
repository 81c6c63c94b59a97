//! Common test utilities for integration tests

use polars::prelude::*;
use secop_cli::extractor::{records_to_table, Record};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A raw record with every selected column populated, as Socrata returns it.
#[allow(dead_code)]
pub fn base_record() -> Record {
    let value = json!({
        "uid": "15-1-141403-1",
        "nombre_de_la_entidad": "ANTIOQUIA - ALCALDÍA MUNICIPIO DE RIONEGRO",
        "departamento_entidad": "Antioquia",
        "orden_entidad": "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 3",
        "tipo_de_proceso": "Licitación obra pública",
        "objeto_a_contratar": "Edificación y construcción",
        "detalle_objeto": "MEJORAMIENTO DE LA VÍA RIONEGRO - EL CARMEN",
        "cuantia_proceso": "689455000",
        "cuantia_contrato": "758400500",
        "valor_total_de_adiciones": "0",
        "valor_contrato_con_adiciones": "758400500",
        "anno_firma": "2016",
        "fecha_fima": "2016-03-01T00:00:00.000",
        "fecha_ini_ejec_contrato": "2016-03-15T00:00:00.000",
        "plazo_de_ejec_del_contrato": "2",
        "rango_de_ejec_del_contrato": "M",
        "tiempo_adiciones_en_dias": "0",
        "tiempo_adiciones_en_meses": "0",
        "fecha_fin_ejec_contrato": "2016-05-15T00:00:00.000"
    });
    match value {
        Value::Object(record) => record,
        _ => unreachable!("literal is an object"),
    }
}

/// Returns [`base_record`] with `overrides` applied; `Value::Null` removes the key.
#[allow(dead_code)]
pub fn record_with(overrides: &[(&str, Value)]) -> Record {
    let mut record = base_record();
    for (key, value) in overrides {
        if value.is_null() {
            record.remove(*key);
        } else {
            record.insert(key.to_string(), value.clone());
        }
    }
    record
}

#[allow(dead_code)]
pub fn raw_table(records: &[Record]) -> DataFrame {
    records_to_table(records).unwrap()
}

#[allow(dead_code)]
pub fn int_column(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[allow(dead_code)]
pub fn float_column(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

#[allow(dead_code)]
pub fn string_column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

/// Serves a single HTTP response on a local port.
///
/// Returns the base URL and a handle resolving to the raw request head.
#[allow(dead_code)]
pub async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    serve_raw(response).await
}

/// Writes `response` verbatim to the first connection, then closes it.
#[allow(dead_code)]
pub async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            request.extend_from_slice(&chunk[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}
