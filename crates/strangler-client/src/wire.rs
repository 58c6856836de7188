//! Wire representation of the remote service's `/requests` payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use strangler_core::{Priority, RemoteStatus, StudentRequest, timestamp};

/// One record as it appears on the wire. `status` is the remote vocabulary;
/// being a closed enum, an unrecognized value fails deserialization, which
/// the client reports as a decode failure rather than letting raw vocabulary
/// through.
#[derive(Debug, Deserialize)]
pub struct WireRequest {
  pub id:           i64,
  pub student_name: String,
  pub school:       String,
  pub status:       RemoteStatus,
  #[serde(deserialize_with = "timestamp::deserialize_flexible")]
  pub created_at:   DateTime<Utc>,
  pub priority:     Priority,
  #[serde(default)]
  pub notes:        Option<String>,
}

impl From<WireRequest> for StudentRequest {
  fn from(wire: WireRequest) -> Self {
    Self {
      id:           wire.id,
      student_name: wire.student_name,
      school:       wire.school,
      status:       wire.status.canonicalize(),
      created_at:   wire.created_at,
      priority:     wire.priority,
      notes:        wire.notes.filter(|n| !n.is_empty()),
    }
  }
}
