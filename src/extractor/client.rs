use crate::constants::APP_TOKEN_HEADER;
use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// One row of a Socrata record set, keyed by column name.
pub type Record = Map<String, Value>;

/// Prefixes `https://` when the endpoint is a bare host such as `www.datos.gov.co`.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Minimal client for the Socrata SODA query endpoint.
pub struct SocrataClient {
    client: reqwest::Client,
    base_url: Url,
    app_token: Option<String>,
}

impl SocrataClient {
    /// Creates a client for the given endpoint.
    ///
    /// Requests are sent anonymously when `app_token` is `None`. A path on the
    /// endpoint is kept as a prefix of the resource path.
    pub fn new(endpoint: &str, app_token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let base_url = Url::parse(&format!("{}/", normalize_endpoint(endpoint)))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            app_token,
        })
    }

    /// Returns `{endpoint}/resource/{dataset_id}.json`.
    pub fn resource_url(&self, dataset_id: &str) -> AppResult<Url> {
        Ok(self
            .base_url
            .join(&format!("resource/{dataset_id}.json"))?)
    }

    /// Runs a SoQL query against a dataset and returns every row of the response.
    ///
    /// # Errors
    ///
    /// - `Authentication` when the service answers 401 or 403
    /// - `NetworkError` for transport failures and any other non-success status
    /// - `ParseError` when the body is not a JSON array of objects
    pub async fn query(&self, dataset_id: &str, soql: &str) -> AppResult<Vec<Record>> {
        let mut url = self.resource_url(dataset_id)?;
        url.query_pairs_mut().append_pair("$query", soql);

        info!(url = %self.resource_url(dataset_id)?, "Querying dataset");
        let mut request = self.client.get(url);
        if let Some(token) = &self.app_token {
            request = request.header(APP_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to query {dataset_id}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status = status.as_u16(), error = %e, "Failed to read error body");
                    String::new()
                }
            };
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Authentication {
                    status: status.as_u16(),
                    body,
                },
                _ => AppError::NetworkError(format!(
                    "HTTP {}: Failed to query {dataset_id}: {body}",
                    status.as_u16()
                )),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Response received");
        parse_records(&body)
    }
}

/// Parses a SODA JSON response body into rows.
pub fn parse_records(body: &str) -> AppResult<Vec<Record>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(AppError::ParseError(
            "Expected a JSON array of records".into(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(AppError::ParseError(format!(
                "Record {i} is not a JSON object: {other}"
            ))),
        })
        .collect()
}
