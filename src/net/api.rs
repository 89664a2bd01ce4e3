//! HTTP client for the portfolio backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures, non-2xx
//! statuses and malformed bodies are all errors; callers decide how to
//! surface them. Nothing here retries.

use super::types::{ApiError, Comment, HappinessDataset, parse_comments, parse_happiness};
use crate::config::PageConfig;

pub const COMMENTS_PATH: &str = "/data";
pub const DELETE_COMMENTS_PATH: &str = "/delete-data";

// =============================================================================
// TRAIT
// =============================================================================

/// Backend operations the page needs.
///
/// Futures are not `Send`: the page runs on a single UI thread and browser
/// fetches cannot cross threads.
#[async_trait::async_trait(?Send)]
pub trait PortfolioApi {
    /// `GET /data?maxComments=<limit>`.
    async fn fetch_comments(&self, limit: u32) -> Result<Vec<Comment>, ApiError>;

    /// `POST /delete-data`.
    async fn delete_comments(&self) -> Result<(), ApiError>;

    /// `POST /data` with the comment form fields.
    async fn submit_comment(&self, text: &str) -> Result<(), ApiError>;

    /// Fetch the static happiness-score dataset.
    async fn fetch_happiness(&self) -> Result<HappinessDataset, ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    happiness_path: String,
}

impl HttpBackend {
    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &PageConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            happiness_path: config.happiness_path.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait(?Send)]
impl PortfolioApi for HttpBackend {
    async fn fetch_comments(&self, limit: u32) -> Result<Vec<Comment>, ApiError> {
        let response = self
            .http
            .get(self.url(COMMENTS_PATH))
            .query(&[("maxComments", limit)])
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        parse_comments(&body)
    }

    async fn delete_comments(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(DELETE_COMMENTS_PATH))
            .send()
            .await
            .map_err(transport)?;
        success_body(response).await.map(drop)
    }

    async fn submit_comment(&self, text: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(COMMENTS_PATH))
            .form(&[("comment", text), ("shouldAddComment", "true")])
            .send()
            .await
            .map_err(transport)?;
        success_body(response).await.map(drop)
    }

    async fn fetch_happiness(&self) -> Result<HappinessDataset, ApiError> {
        let response = self
            .http
            .get(self.url(&self.happiness_path))
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        parse_happiness(&body)
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Read the body of a 2xx response, or turn the status into an error.
async fn success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16() });
    }
    response.text().await.map_err(transport)
}
