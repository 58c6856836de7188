//! Handlers for the request-serving boundary.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/requests` | Optional `?use_new=1` selects the remote path |
//! | `GET`  | `/healthz`  | Liveness probe |

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use strangler_core::{
  Provenance, RemoteSource, RequestsEnvelope, RouteDirective, StudentRequest,
};

use crate::AppState;

// ─── List requests ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub use_new: Option<String>,
}

/// Response body: the envelope with its derived count made explicit.
/// `record_count == 0` is a normal empty state for the consumer to render,
/// never an error.
#[derive(Debug, Serialize)]
pub struct RequestsResponse {
  pub provenance:   Provenance,
  pub record_count: usize,
  pub records:      Vec<StudentRequest>,
}

impl From<RequestsEnvelope> for RequestsResponse {
  fn from(envelope: RequestsEnvelope) -> Self {
    Self {
      provenance:   envelope.provenance,
      record_count: envelope.record_count(),
      records:      envelope.records,
    }
  }
}

/// `GET /requests[?use_new=<flag>]`
///
/// Infallible: the router absorbs every downstream failure via fallback, so
/// this handler always answers 200 with a provenance-tagged record list.
pub async fn list_requests<R>(
  State(state): State<AppState<R>>,
  Query(params): Query<ListParams>,
) -> Json<RequestsResponse>
where
  R: RemoteSource + 'static,
{
  let directive = RouteDirective::from_flag(params.use_new.as_deref());
  let envelope = state.router.route(directive).await;
  Json(RequestsResponse::from(envelope))
}

// ─── Health ──────────────────────────────────────────────────────────────────

/// `GET /healthz`
pub async fn healthz() -> Json<serde_json::Value> {
  Json(json!({ "status": "ok" }))
}
