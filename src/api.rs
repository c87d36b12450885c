use crate::config::Config;
use crate::model::{ResortDetail, ResortSummary};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Failures of a single resort API request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("search text is empty")]
    EmptyInput,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no resort matches \"{query}\"")]
    NotFound { query: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::EmptyInput => "empty_input",
            FetchError::Network(_) | FetchError::Status { .. } => "network",
            FetchError::NotFound { .. } => "not_found",
            FetchError::Malformed(_) => "malformed_response",
        }
    }
}

/// Structured error body the backend sends when the upstream lookup fails.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Read-only client for the resort API.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base: Url,
}

impl Gateway {
    pub fn new(base: Url, config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    pub fn resorts_url(&self) -> String {
        self.endpoint("api/resorts")
    }

    /// Search URL with the whole resort name percent-encoded (spaces become `%20`).
    pub fn search_url(&self, name: &str) -> String {
        format!(
            "{}?resort={}",
            self.endpoint("api/search"),
            urlencoding::encode(name)
        )
    }

    async fn get(&self, url: &str) -> Result<(StatusCode, String), FetchError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body))
    }

    /// Look up one resort by name.
    pub async fn search_by_name(&self, name: &str) -> Result<ResortDetail, FetchError> {
        let query = name.trim();
        if query.is_empty() {
            return Err(FetchError::EmptyInput);
        }

        let url = self.search_url(query);
        let (status, body) = self.get(&url).await?;
        let not_found = || FetchError::NotFound {
            query: query.to_string(),
        };

        if status == StatusCode::NOT_FOUND {
            return Err(not_found());
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }
        if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
            tracing::warn!(query, error = %err.error, "backend reported a lookup error");
            return Err(not_found());
        }

        let detail: ResortDetail = serde_json::from_str(&body)?;
        if detail.name.trim().to_lowercase() != query.to_lowercase() {
            tracing::warn!(query, returned = %detail.name, "resort name does not match the query");
            return Err(not_found());
        }
        Ok(detail)
    }

    /// Fetch every known resort in server rank order.
    pub async fn list_all(&self) -> Result<Vec<ResortSummary>, FetchError> {
        let url = self.resorts_url();
        let (status, body) = self.get(&url).await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
