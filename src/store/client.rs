//! HTTP client for remote store requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the store's REST endpoint, handling authentication headers, filter
//! parameters, and response parsing.

use super::error::StoreError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

const REST_PATH: &str = "rest/v1";

/// Makes requests to the remote store and tries to conform response data to
/// the given record type.
///
pub struct Client {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and access key.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Client {
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Return all rows of a table matching the given filter parameters.
    ///
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self.call(Method::GET, table, params, None).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Insert a row into a table and return the written row as reported by
    /// the backend.
    ///
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        body: serde_json::Value,
    ) -> Result<T, StoreError> {
        let response = self.call(Method::POST, table, &[], Some(body)).await?;
        let bytes = response.bytes().await?;
        let mut rows: Vec<T> = serde_json::from_slice(&bytes)?;
        if rows.is_empty() {
            return Err(StoreError::EmptyInsertResponse {
                table: table.to_owned(),
            });
        }
        Ok(rows.remove(0))
    }

    /// Apply a partial update to the row with the given id.
    ///
    pub async fn update(
        &self,
        table: &str,
        id: &str,
        body: serde_json::Value,
    ) -> Result<(), StoreError> {
        let filter = format!("eq.{}", id);
        self.call(Method::PATCH, table, &[("id", filter.as_str())], Some(body))
            .await?;
        Ok(())
    }

    /// Delete the row with the given id.
    ///
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let filter = format!("eq.{}", id);
        self.call(Method::DELETE, table, &[("id", filter.as_str())], None)
            .await?;
        Ok(())
    }

    /// Make a request and return the response, converting non-success
    /// statuses into errors.
    ///
    async fn call(
        &self,
        method: Method,
        table: &str,
        params: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<Response, StoreError> {
        let request_url = format!("{}/{}/{}", self.base_url, REST_PATH, table);

        let mut request = self
            .http_client
            .request(method.clone(), &request_url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key));

        if !params.is_empty() {
            request = request.query(&params);
        }

        // The backend only echoes written rows back when asked to
        if method == Method::POST {
            request = request.header("Prefer", "return=representation");
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}
