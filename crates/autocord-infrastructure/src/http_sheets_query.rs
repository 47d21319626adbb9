//! HttpSheetsQuery - spreadsheet query backend over a JSON REST API.
//!
//! Each query is a `POST {base_url}/{select|update|insert}` whose body is
//! the serialized params struct.

use async_trait::async_trait;
use autocord_core::sheets::{InsertParams, SelectParams, SelectResult, SheetsQuery, UpdateParams};
use autocord_core::{AutocordError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::SheetsConfig;

/// [`SheetsQuery`] implementation that talks to an HTTP query endpoint.
#[derive(Clone)]
pub struct HttpSheetsQuery {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpSheetsQuery {
    /// Creates a backend for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
        }
    }

    /// Creates a backend from a loaded config.
    pub fn from_config(config: &SheetsConfig) -> Self {
        let query = Self::new(config.base_url.clone());
        match &config.api_token {
            Some(token) => query.with_api_token(token.clone()),
            None => query,
        }
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{}", self.base_url, operation)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let mut request = self.client.post(self.endpoint(operation)).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            AutocordError::backend(None, format!("Sheets {operation} request failed: {err}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!(%status, operation, "Sheets query failed");
            return Err(map_http_error(status, body_text));
        }

        Ok(response)
    }

    async fn post_json<B, T>(&self, operation: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(operation, body)
            .await?
            .json()
            .await
            .map_err(|err| AutocordError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to parse Sheets {operation} response: {err}"),
            })
    }
}

#[async_trait]
impl SheetsQuery for HttpSheetsQuery {
    async fn select(&self, params: &SelectParams) -> Result<SelectResult> {
        self.post_json("select", params).await
    }

    async fn update(&self, params: &UpdateParams) -> Result<()> {
        self.post("update", params).await.map(|_| ())
    }

    async fn insert(&self, params: &InsertParams) -> Result<()> {
        self.post("insert", params).await.map(|_| ())
    }
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn map_http_error(status: StatusCode, body: String) -> AutocordError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    AutocordError::backend(Some(status.as_u16()), message)
}
