//! The routing directive — the single externally controlled variable.
//!
//! The surrounding system expresses the directive as a raw flag value (a
//! query or config string). It is decoded into this closed two-variant type
//! exactly once, at the boundary, so downstream logic is exhaustive and
//! cannot fall through to an unintended branch.

/// Which backend to prefer for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDirective {
  UseLegacy,
  UseRemote,
}

impl RouteDirective {
  /// The flag value that selects the remote backend.
  pub const REMOTE_FLAG: &str = "1";

  /// Decode a raw flag value. Exactly [`Self::REMOTE_FLAG`] selects
  /// `UseRemote`; anything else, including absence, fails safe toward the
  /// known-good legacy path.
  pub fn from_flag(raw: Option<&str>) -> Self {
    match raw {
      Some(Self::REMOTE_FLAG) => Self::UseRemote,
      _ => Self::UseLegacy,
    }
  }
}
