//! The canonical request record and its status vocabularies.
//!
//! Every record shown to a consumer is a [`StudentRequest`] with a
//! [`RequestStatus`] drawn from the canonical set. The remote service speaks
//! its own status vocabulary ([`RemoteStatus`]); the mapping between the two
//! is fixed and applied on ingest, so raw remote vocabulary never travels
//! past the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Status vocabularies ─────────────────────────────────────────────────────

/// Canonical request status. Both sources resolve to this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
  Active,
  Pending,
  Completed,
}

/// The remote service's status vocabulary, exactly as it appears on the
/// wire. A closed enum: any value outside this set fails deserialization,
/// which keeps unknown vocabulary from leaking into canonical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteStatus {
  Possessed,
  Summoned,
  Pending,
  Banished,
}

impl RemoteStatus {
  /// Map a remote status into the canonical set. Total over the enum.
  pub fn canonicalize(self) -> RequestStatus {
    match self {
      Self::Possessed | Self::Summoned => RequestStatus::Active,
      Self::Pending => RequestStatus::Pending,
      Self::Banished => RequestStatus::Completed,
    }
  }
}

/// Urgency level. No ordering is enforced beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
  Critical,
  High,
  Medium,
  Low,
}

// ─── Canonical record ────────────────────────────────────────────────────────

/// One migratable unit of work, normalized from either source.
///
/// `id` is unique within a result set but the legacy and remote datasets are
/// independent; no per-id identity across sources is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRequest {
  pub id:           i64,
  pub student_name: String,
  pub school:       String,
  pub status:       RequestStatus,
  pub created_at:   DateTime<Utc>,
  pub priority:     Priority,
  pub notes:        Option<String>,
}
