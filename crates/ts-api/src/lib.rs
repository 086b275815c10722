//! REST client for the timesheet service.
//!
//! Provides the two remote operations the timesheet needs:
//! - Employee directory retrieval (`GET /employees`)
//! - Batch entry submission (`POST /timeEntries`)

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use ts_core::{Employee, SubmissionEntry};

/// Service used when no base URL is configured.
pub const DEFAULT_API_BASE: &str = "https://synctask-api.onrender.com";

const EMPLOYEES_PATH: &str = "/employees";
const TIME_ENTRIES_PATH: &str = "/timeEntries";

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provided bearer token was invalid.
    #[error("invalid API token: {reason}")]
    InvalidToken { reason: &'static str },
    /// The base URL is unusable.
    #[error("invalid API base URL: {reason}")]
    InvalidBaseUrl { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Timesheet API client.
///
/// # Thread Safety
///
/// The client is safe to clone and share across threads. Each clone shares
/// the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the service at `base_url`.
    ///
    /// Requests carry `Authorization: Bearer <token>` when a token is given.
    /// With no timeout, requests wait as long as the service takes.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is blank, the token is empty or
    /// whitespace-only, or the HTTP client fails to build.
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::InvalidBaseUrl {
                reason: "base URL cannot be empty",
            });
        }

        if let Some(token) = token {
            if token.is_empty() {
                return Err(ApiError::InvalidToken {
                    reason: "token cannot be empty",
                });
            }
            if token.trim().is_empty() {
                return Err(ApiError::InvalidToken {
                    reason: "token cannot be whitespace-only",
                });
            }
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token: token.map(str::to_string),
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetches the employee directory, in the order the service lists it.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(EMPLOYEES_PATH)))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    /// Loads the directory, degrading to an empty list on any failure.
    ///
    /// The failure is logged, not returned: an empty directory simply yields
    /// an empty summary.
    pub async fn load_directory(&self) -> Vec<Employee> {
        match self.fetch_employees().await {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "loaded employee directory");
                employees
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch employee directory");
                Vec::new()
            }
        }
    }

    /// Sends one batch of complete entries.
    pub async fn submit_entries(&self, entries: &[SubmissionEntry]) -> Result<(), ApiError> {
        let batch = SubmissionBatch { entries };
        let response = self
            .authorize(self.http.post(self.url(TIME_ENTRIES_PATH)))
            .json(&batch)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(count = entries.len(), %status, "submitted entries");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SubmissionBatch<'a> {
    entries: &'a [SubmissionEntry],
}
