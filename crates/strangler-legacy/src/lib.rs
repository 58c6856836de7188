//! The legacy data source — the pre-migration dataset, in process.
//!
//! This is the designated always-available fallback target, so it performs
//! no I/O, holds no external state, and has no failure path: [`fetch`]
//! allocates a fresh copy of a fixed fixture on every call. Records are
//! authored directly in canonical status vocabulary; insertion order is
//! display order and must be preserved.
//!
//! The fixture is kept semantically aligned with the remote service's seed
//! dataset so the two paths stay comparable during the migration, but the
//! two are independent datasets — no per-id identity is guaranteed.

use chrono::{DateTime, TimeZone, Utc};
use strangler_core::{Priority, RequestStatus, StudentRequest};

/// In-process provider of the fixed legacy dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySource;

impl LegacySource {
  pub fn new() -> Self {
    Self
  }

  /// Return the legacy dataset. Pure and total: repeated calls yield
  /// structurally identical sequences.
  pub fn fetch(&self) -> Vec<StudentRequest> {
    vec![
      StudentRequest {
        id:           1,
        student_name: "Victor Frankenstein".into(),
        school:       "Miskatonic University".into(),
        status:       RequestStatus::Active,
        created_at:   ts(2024, 10, 31, 23, 59, 59),
        priority:     Priority::Critical,
        notes:        Some(
          "Urgent reanimation assistance required for final thesis project"
            .into(),
        ),
      },
      StudentRequest {
        id:           2,
        student_name: "Mina Harker".into(),
        school:       "Transylvania Academy".into(),
        status:       RequestStatus::Active,
        created_at:   ts(2024, 10, 30, 18, 30, 0),
        priority:     Priority::High,
        notes:        Some(
          "Vampire literature research - need access to restricted archives"
            .into(),
        ),
      },
      StudentRequest {
        id:           3,
        student_name: "Henry Jekyll".into(),
        school:       "London Medical College".into(),
        status:       RequestStatus::Pending,
        created_at:   ts(2024, 10, 29, 14, 15, 30),
        priority:     Priority::Medium,
        notes:        Some(
          "Chemistry lab equipment request for transformation experiments"
            .into(),
        ),
      },
      StudentRequest {
        id:           4,
        student_name: "Dorian Gray".into(),
        school:       "Oxford Academy of Arts".into(),
        status:       RequestStatus::Completed,
        created_at:   ts(2024, 10, 28, 9, 45, 0),
        priority:     Priority::Low,
        notes:        Some(
          "Portrait restoration services - urgent but confidential".into(),
        ),
      },
      StudentRequest {
        id:           5,
        student_name: "Ichabod Crane".into(),
        school:       "Sleepy Hollow Institute".into(),
        status:       RequestStatus::Active,
        created_at:   ts(2024, 10, 27, 22, 0, 0),
        priority:     Priority::High,
        notes:        Some(
          "Requesting transfer due to headless horseman incidents".into(),
        ),
      },
      StudentRequest {
        id:           6,
        student_name: "Wednesday Addams".into(),
        school:       "Nevermore Academy".into(),
        status:       RequestStatus::Active,
        created_at:   ts(2024, 10, 26, 13, 13, 13),
        priority:     Priority::Medium,
        notes:        Some("Advanced torture techniques seminar enrollment".into()),
      },
      StudentRequest {
        id:           7,
        student_name: "Raven Darkholme".into(),
        school:       "Xavier's School for Gifted Youngsters".into(),
        status:       RequestStatus::Pending,
        created_at:   ts(2024, 10, 25, 16, 20, 0),
        priority:     Priority::Critical,
        notes:        Some(
          "Shape-shifting ethics course - mandatory for graduation".into(),
        ),
      },
    ]
  }
}

/// Fixture timestamps are authored as UTC wall-clock values; UTC has no
/// ambiguous instants, so the conversion is always a single result.
fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(y, mo, d, h, mi, s)
    .single()
    .expect("fixture timestamp is valid")
}
