//! # Tanebi HTTP Client
//!
//! Wrapper around the Tanebi REST API for use by the MCP server.
//!
//! One request per call: no retries, no caching, no timeout beyond the
//! reqwest defaults.

use crate::config::Config;
use reqwest::{Method, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tanebi_core::{IdeaDetail, IdeaEnvelope, IdeaId, IdeaListResponse, ListQuery, NewIdea};
use thiserror::Error;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-API-Key";

const IDEAS_PATH: &str = "/api/v1/ideas";

/// Errors from the HTTP client layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Cannot reach the Tanebi API.
    #[error("Cannot connect to Tanebi API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// The API answered with a non-2xx status.
    #[error("Tanebi API error: {status} {status_text} - {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// HTTP client that wraps calls to the Tanebi REST API.
#[derive(Clone)]
pub struct TanebiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TanebiClient {
    /// Create a client from the startup configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// `Content-Type: application/json` is only set when `body` is present.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = method.as_str(), path, "Tanebi API request");

        let mut req = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| ClientError::ConnectionFailed {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        self.handle_response(resp).await
    }

    /// Check the status code and parse JSON.
    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Tanebi API returned an error status");
            return Err(ClientError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }
        resp.json::<Value>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// GET /api/v1/ideas?page={p}&per_page={n}
    pub async fn list_ideas(&self, query: &ListQuery) -> Result<IdeaListResponse, ClientError> {
        let path = format!(
            "{IDEAS_PATH}?page={}&per_page={}",
            query.page(),
            query.per_page()
        );
        let resp = self.request(Method::GET, &path, None).await?;
        decode(resp)
    }

    /// GET /api/v1/ideas/{id} → idea, wrapped or bare.
    pub async fn get_idea(&self, id: IdeaId) -> Result<IdeaDetail, ClientError> {
        let path = format!("{IDEAS_PATH}/{id}");
        let resp = self.request(Method::GET, &path, None).await?;
        decode::<IdeaEnvelope>(resp).map(IdeaEnvelope::into_idea)
    }

    /// POST /api/v1/ideas → created idea, wrapped or bare.
    pub async fn create_idea(&self, idea: &NewIdea) -> Result<IdeaDetail, ClientError> {
        let body = serde_json::to_value(idea).map_err(|e| ClientError::Parse(e.to_string()))?;
        let resp = self.request(Method::POST, IDEAS_PATH, Some(&body)).await?;
        decode::<IdeaEnvelope>(resp).map(IdeaEnvelope::into_idea)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
}
