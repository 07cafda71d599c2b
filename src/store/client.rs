//! Generic CRUD client for the hosted record store
//!
//! Every collection lives under `{base}/apps/{app_id}/records`; record
//! bodies are `{ "fields": { ... } }`. Listing returns an identifier-keyed
//! map which is flattened into a record sequence.

use std::time::Duration;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};
use crate::models::record::{Record, RecordBody, RecordWithId};

#[derive(Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RecordStoreClient {
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Base URL of the store, used to build reference locator URLs
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all records of an app, preserving the store's ordering.
    pub async fn list<F: DeserializeOwned>(&self, app_id: &str) -> AppResult<Vec<Record<F>>> {
        let url = format!("{}/apps/{}/records", self.base_url, app_id);
        let response = self.request(self.http.get(&url)).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::Upstream(format!("App {} not found", app_id)));
        }
        let map: IndexMap<String, RecordBody<F>> = response.json().await?;
        Ok(Record::from_listing(map))
    }

    /// Fetch a single record by identifier.
    pub async fn get<F: DeserializeOwned>(
        &self,
        app_id: &str,
        record_id: &str,
    ) -> AppResult<Record<F>> {
        let url = format!("{}/apps/{}/records/{}", self.base_url, app_id, record_id);
        let response = self.request(self.http.get(&url)).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Record {} not found", record_id)));
        }
        let body: RecordWithId<F> = response.json().await?;
        Ok(body.into())
    }

    /// Create a record from a field map.
    pub async fn create<F: Serialize>(&self, app_id: &str, fields: &F) -> AppResult<()> {
        let url = format!("{}/apps/{}/records", self.base_url, app_id);
        let request = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "fields": fields }));
        let response = self.request(request).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::Upstream(format!("App {} not found", app_id)));
        }
        Ok(())
    }

    /// Patch a record with a partial field map; omitted fields are untouched.
    pub async fn update<F: Serialize>(
        &self,
        app_id: &str,
        record_id: &str,
        fields: &F,
    ) -> AppResult<()> {
        let url = format!("{}/apps/{}/records/{}", self.base_url, app_id, record_id);
        let request = self
            .http
            .patch(&url)
            .json(&serde_json::json!({ "fields": fields }));
        let response = self.request(request).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Record {} not found", record_id)));
        }
        Ok(())
    }

    /// Delete a record.
    pub async fn delete(&self, app_id: &str, record_id: &str) -> AppResult<()> {
        let url = format!("{}/apps/{}/records/{}", self.base_url, app_id, record_id);
        let response = self.request(self.http.delete(&url)).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Record {} not found", record_id)));
        }
        Ok(())
    }

    /// Cheap reachability probe against one app's records endpoint.
    pub async fn ping(&self, app_id: &str) -> AppResult<()> {
        let url = format!("{}/apps/{}/records", self.base_url, app_id);
        let response = self.request(self.http.get(&url)).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::Upstream(format!("App {} not found", app_id)));
        }
        Ok(())
    }

    /// Send a request and surface non-success responses with the upstream
    /// body text. 404 is left to the caller, which knows the record id.
    async fn request(&self, builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let builder = match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "record store request failed");
        Err(AppError::Upstream(format!("{}: {}", status, body)))
    }
}
