//! The result envelope handed to the presentation boundary.

use serde::{Deserialize, Serialize};

use crate::request::StudentRequest;

/// Which backend actually produced a result.
///
/// `Fallback` means the remote service was attempted and failed, so the
/// legacy dataset was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
  Legacy,
  Remote,
  Fallback,
}

/// An ordered record list tagged with its provenance.
///
/// Constructed fresh per request and never mutated afterwards. An empty
/// record list is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestsEnvelope {
  pub provenance: Provenance,
  pub records:    Vec<StudentRequest>,
}

impl RequestsEnvelope {
  pub fn new(provenance: Provenance, records: Vec<StudentRequest>) -> Self {
    Self { provenance, records }
  }

  /// Derived count; always equal to the record list length.
  pub fn record_count(&self) -> usize {
    self.records.len()
  }
}
