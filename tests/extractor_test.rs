//! Integration tests for extractor module

#[path = "common/mod.rs"]
mod common;

use common::*;
use secop_cli::cli::run_workflow;
use secop_cli::config::ResolvedConfig;
use secop_cli::constants::SELECT_FIELDS;
use secop_cli::errors::AppError;
use secop_cli::extractor::extract_data;
use serde_json::{json, Value};
use tempfile::TempDir;

fn local_config(endpoint: String, token_env: &str) -> ResolvedConfig {
    ResolvedConfig {
        endpoint,
        token_env: token_env.to_string(),
        timeout_secs: 5,
        ..ResolvedConfig::default()
    }
}

fn records_body(records: &[secop_cli::extractor::Record]) -> String {
    Value::Array(records.iter().cloned().map(Value::Object).collect()).to_string()
}

#[tokio::test]
async fn test_extract_data_sends_query_and_token() {
    std::env::set_var("SECOP_CLI_TEST_TOKEN_SEND", "app-token-123");
    let body = records_body(&[base_record(), record_with(&[("uid", json!("16-1-1"))])]);
    let (endpoint, request) = serve_once("200 OK", body).await;

    let table = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_SEND"))
        .await
        .unwrap();

    assert_eq!(table.height(), 2);
    assert_eq!(table.width(), SELECT_FIELDS.len());

    let request = request.await.unwrap();
    assert!(request.starts_with("GET /resource/xvdy-vvsk.json?%24query=SELECT"));
    assert!(request.to_lowercase().contains("x-app-token: app-token-123"));
}

#[tokio::test]
async fn test_extract_data_without_token_is_anonymous() {
    let (endpoint, request) = serve_once("200 OK", "[]".to_string()).await;

    let table = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET"))
        .await
        .unwrap();

    assert_eq!(table.height(), 0);
    assert_eq!(table.width(), SELECT_FIELDS.len());
    assert!(!request.await.unwrap().to_lowercase().contains("x-app-token"));
}

#[tokio::test]
async fn test_extract_data_forbidden_is_authentication_error() {
    let body = json!({"code": "permission_denied", "message": "Invalid app_token"}).to_string();
    let (endpoint, _request) = serve_once("403 Forbidden", body).await;

    let result = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")).await;
    match result.unwrap_err() {
        AppError::Authentication { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("Invalid app_token"));
        }
        other => panic!("Expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_data_unauthorized_is_authentication_error() {
    let body = json!({"code": "authentication_required"}).to_string();
    let (endpoint, _request) = serve_once("401 Unauthorized", body).await;

    let result = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")).await;
    match result.unwrap_err() {
        AppError::Authentication { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_required"));
        }
        other => panic!("Expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_data_truncated_error_body_keeps_status() {
    let response = "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
        .to_string();
    let (endpoint, _request) = serve_raw(response).await;

    let result = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")).await;
    match result.unwrap_err() {
        AppError::NetworkError(msg) => assert!(msg.starts_with("HTTP 502")),
        other => panic!("Expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_data_server_error_is_surfaced() {
    let (endpoint, _request) = serve_once("500 Internal Server Error", "{}".to_string()).await;

    let result = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")).await;
    match result.unwrap_err() {
        AppError::NetworkError(msg) => assert!(msg.contains("HTTP 500")),
        other => panic!("Expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_extract_data_malformed_response() {
    let (endpoint, _request) = serve_once("200 OK", "not json".to_string()).await;

    let result = extract_data(&local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")).await;
    assert!(matches!(result, Err(AppError::ParseError(_))));
}

#[tokio::test]
async fn test_extract_data_rejects_bad_dataset_id() {
    let config = ResolvedConfig {
        dataset_id: "../secrets".to_string(),
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        extract_data(&config).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_run_workflow_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out/contracts.csv");
    let body = records_body(&[base_record()]);
    let (endpoint, _request) = serve_once("200 OK", body).await;

    let config = ResolvedConfig {
        output_path: output_path.clone(),
        output_format: "csv".to_string(),
        ..local_config(endpoint, "SECOP_CLI_TEST_TOKEN_UNSET")
    };
    run_workflow(&config).await.unwrap();

    let contents = std::fs::read_to_string(&output_path).unwrap();
    let header = contents.lines().next().unwrap();
    assert!(header.starts_with("CONTRACT_ID,ENTITY_NAME,DEPARTMENT"));
    assert!(header.ends_with("OWNER,REGION"));
    assert_eq!(contents.lines().count(), 2);
}
