//! The `RemoteSource` trait and its failure taxonomy.
//!
//! The trait is implemented by the HTTP client crate. The router depends on
//! this abstraction, not on any concrete transport, so the remote dependency
//! can be swapped or removed without touching the decision logic.

use std::future::Future;

use thiserror::Error;

use crate::request::StudentRequest;

// ─── Failure taxonomy ────────────────────────────────────────────────────────

/// Every way a remote fetch can fail. All variants are recovered by the
/// router via fallback; none propagates to the presentation boundary.
#[derive(Debug, Error)]
pub enum FetchError {
  /// The hard deadline elapsed before a complete response arrived.
  #[error("request timed out")]
  Timeout,

  /// The service answered with something other than 200.
  #[error("unexpected HTTP status {0}")]
  BadStatus(u16),

  /// The body was not a well-formed record array, or used vocabulary
  /// outside the fixed mapping table.
  #[error("failed to decode response: {0}")]
  Decode(String),

  /// DNS, connection, or stream-level failure.
  #[error("transport error: {0}")]
  Transport(String),
}

impl FetchError {
  /// Stable label for structured logging — the failure kind without any
  /// payload detail.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Timeout => "timeout",
      Self::BadStatus(_) => "bad_status",
      Self::Decode(_) => "decode",
      Self::Transport(_) => "transport",
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the modern backend.
///
/// Implementations must return normalized canonical records — status mapping
/// happens on their side of this seam — and must surface every failure as a
/// [`FetchError`] rather than panicking.
pub trait RemoteSource: Send + Sync {
  /// Fetch the full record set from the remote service.
  fn fetch_requests(
    &self,
  ) -> impl Future<Output = Result<Vec<StudentRequest>, FetchError>> + Send + '_;
}
