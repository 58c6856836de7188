//! JSON boundary for the strangler router.
//!
//! Exposes an axum [`Router`] over any [`RemoteSource`]. The routing flag
//! arrives as the `use_new` query parameter and is decoded into a
//! [`RouteDirective`](strangler_core::RouteDirective) once, at this
//! boundary; everything behind it works with the closed directive type.
//! Presentation (HTML, styling) is the consumer's concern.

pub mod handlers;

use std::sync::Arc;

use axum::{Router, routing::get};
use serde::Deserialize;
use strangler_core::RemoteSource;
use strangler_router::StranglerRouter;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `STRANGLER_*` environment overrides. Every field has a default, so the
/// server starts with no configuration at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,

  #[serde(default = "default_port")]
  pub port: u16,

  /// Base URL of the modern request service.
  #[serde(default = "default_api_base_url")]
  pub api_base_url: String,

  /// Hard deadline, in seconds, on a single remote fetch.
  #[serde(default = "default_request_timeout_secs")]
  pub request_timeout_secs: u64,
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  8080
}

fn default_api_base_url() -> String {
  strangler_client::DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
  strangler_client::DEFAULT_TIMEOUT.as_secs()
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<R> {
  pub router: Arc<StranglerRouter<R>>,
}

impl<R> Clone for AppState<R> {
  fn clone(&self) -> Self {
    Self { router: Arc::clone(&self.router) }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the request-serving boundary.
pub fn api_router<R>(state: AppState<R>) -> Router
where
  R: RemoteSource + 'static,
{
  Router::new()
    .route("/requests", get(handlers::list_requests::<R>))
    .route("/healthz", get(handlers::healthz))
    .with_state(state)
}

#[cfg(test)]
mod tests;
