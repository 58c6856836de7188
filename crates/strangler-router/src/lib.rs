//! The strangler router — the single seam controlling migration behavior.
//!
//! Given a [`RouteDirective`], the router either serves the legacy dataset
//! directly or attempts one remote fetch and absorbs any failure by falling
//! back to legacy. The result is always a [`RequestsEnvelope`] tagged with
//! the path that actually served it; `route` has no failure path of its own,
//! so a migration-in-progress deployment never exposes a harder failure mode
//! than the system it is replacing.
//!
//! Each invocation is independent and holds no state across calls, so any
//! number of callers may route concurrently. No retries happen here: one
//! remote attempt either succeeds or triggers immediate fallback, keeping
//! the fallback deterministic and low-latency. Retry policy, if wanted,
//! belongs to the caller.

use strangler_core::{
  Provenance, RemoteSource, RequestsEnvelope, RouteDirective,
};
use strangler_legacy::LegacySource;

/// Routes each request to the legacy dataset or the remote service,
/// normalizing both into provenance-tagged envelopes.
#[derive(Debug, Clone)]
pub struct StranglerRouter<R> {
  legacy: LegacySource,
  remote: R,
}

impl<R: RemoteSource> StranglerRouter<R> {
  pub fn new(remote: R) -> Self {
    Self { legacy: LegacySource::new(), remote }
  }

  /// Serve one request according to `directive`.
  ///
  /// - `UseLegacy`: the remote service is never contacted.
  /// - `UseRemote`: one fetch attempt; on any [`FetchError`] the legacy
  ///   dataset is substituted and the envelope is tagged `fallback`.
  ///
  /// [`FetchError`]: strangler_core::FetchError
  pub async fn route(&self, directive: RouteDirective) -> RequestsEnvelope {
    match directive {
      RouteDirective::UseLegacy => {
        RequestsEnvelope::new(Provenance::Legacy, self.legacy.fetch())
      }
      RouteDirective::UseRemote => match self.remote.fetch_requests().await {
        Ok(records) => RequestsEnvelope::new(Provenance::Remote, records),
        Err(e) => {
          // Log the failure kind only, so operators can tell a remote
          // outage apart from a genuine empty dataset.
          tracing::warn!(
            kind = e.kind(),
            error = %e,
            "remote fetch failed, serving legacy fallback"
          );
          RequestsEnvelope::new(Provenance::Fallback, self.legacy.fetch())
        }
      },
    }
  }
}

#[cfg(test)]
mod tests;
