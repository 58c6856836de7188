//! Handler tests driven through the axum router with `tower::oneshot`.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use strangler_core::{FetchError, RemoteSource, StudentRequest};
use strangler_legacy::LegacySource;
use strangler_router::StranglerRouter;
use tower::ServiceExt as _;

use crate::{AppState, api_router};

#[derive(Clone, Copy)]
struct HealthyRemote;

impl RemoteSource for HealthyRemote {
  async fn fetch_requests(&self) -> Result<Vec<StudentRequest>, FetchError> {
    Ok(LegacySource::new().fetch().into_iter().take(3).collect())
  }
}

#[derive(Clone, Copy)]
struct BrokenRemote;

impl RemoteSource for BrokenRemote {
  async fn fetch_requests(&self) -> Result<Vec<StudentRequest>, FetchError> {
    Err(FetchError::BadStatus(500))
  }
}

fn app<R: RemoteSource + 'static>(remote: R) -> axum::Router {
  api_router(AppState { router: Arc::new(StranglerRouter::new(remote)) })
}

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
  let response = app
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn absent_flag_serves_legacy() {
  let body = get_json(app(HealthyRemote), "/requests").await;
  assert_eq!(body["provenance"], "legacy");
  assert_eq!(body["record_count"], 7);
  assert_eq!(body["records"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn off_flag_serves_legacy() {
  let body = get_json(app(HealthyRemote), "/requests?use_new=0").await;
  assert_eq!(body["provenance"], "legacy");
}

#[tokio::test]
async fn on_flag_serves_remote() {
  let body = get_json(app(HealthyRemote), "/requests?use_new=1").await;
  assert_eq!(body["provenance"], "remote");
  assert_eq!(body["record_count"], 3);
}

#[tokio::test]
async fn on_flag_with_broken_remote_serves_fallback() {
  let body = get_json(app(BrokenRemote), "/requests?use_new=1").await;
  assert_eq!(body["provenance"], "fallback");
  assert_eq!(body["record_count"], 7);
}

#[tokio::test]
async fn record_count_matches_record_list_length() {
  let body = get_json(app(HealthyRemote), "/requests?use_new=1").await;
  let count = body["record_count"].as_u64().unwrap() as usize;
  assert_eq!(body["records"].as_array().unwrap().len(), count);
}

#[tokio::test]
async fn healthz_answers_ok() {
  let body = get_json(app(HealthyRemote), "/healthz").await;
  assert_eq!(body["status"], "ok");
}
