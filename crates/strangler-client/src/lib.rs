//! HTTP client for the modern request service.
//!
//! Implements [`RemoteSource`] over reqwest. Every failure path — transport,
//! timeout, bad status, malformed or off-vocabulary body — surfaces as a
//! [`FetchError`]; nothing panics past this boundary, so the caller can fall
//! back deterministically.

mod wire;

use std::time::Duration;

use strangler_core::{FetchError, RemoteSource, StudentRequest};
use wire::WireRequest;

/// Default endpoint of the modern service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Hard deadline on a single fetch. The timeout is a cancellation point,
/// not a hint: a hung remote cannot stall a caller past it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the remote service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub base_url: String,
  pub timeout:  Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  DEFAULT_TIMEOUT,
    }
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async HTTP client for the modern service's JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ApiClient {
  client: reqwest::Client,
  config: ClientConfig,
}

impl ApiClient {
  pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| FetchError::Transport(format!("building HTTP client: {e}")))?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  /// `GET {base_url}/requests` — fetch and normalize the full record set.
  ///
  /// Status mapping happens here, on ingest: the returned records carry
  /// canonical vocabulary only. An empty array is a successful, empty
  /// result, not a failure.
  async fn fetch(&self) -> Result<Vec<StudentRequest>, FetchError> {
    let response = self
      .client
      .get(self.url("/requests"))
      .header(reqwest::header::ACCEPT, "application/json")
      .send()
      .await
      .map_err(classify)?;

    let status = response.status();
    if status.as_u16() != 200 {
      return Err(FetchError::BadStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(classify)?;
    let wire: Vec<WireRequest> = serde_json::from_slice(&body)
      .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(wire.into_iter().map(StudentRequest::from).collect())
  }
}

impl RemoteSource for ApiClient {
  async fn fetch_requests(&self) -> Result<Vec<StudentRequest>, FetchError> {
    let result = self.fetch().await;
    if let Err(e) = &result {
      tracing::debug!(kind = e.kind(), error = %e, "remote fetch failed");
    }
    result
  }
}

/// Sort a reqwest error into the fetch taxonomy. Timeouts are reported
/// distinctly; everything else transport-level keeps its detail string.
fn classify(e: reqwest::Error) -> FetchError {
  if e.is_timeout() {
    FetchError::Timeout
  } else {
    FetchError::Transport(e.to_string())
  }
}
