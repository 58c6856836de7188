//! Core types for the strangler migration demo.
//!
//! This crate is deliberately free of HTTP dependencies. It defines the
//! canonical request schema both data sources normalize into, the routing
//! directive, the result envelope, and the [`RemoteSource`] seam the router
//! fetches through. All other crates depend on it; it depends on nothing
//! heavier than serde and chrono.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod directive;
pub mod envelope;
pub mod error;
pub mod request;
pub mod source;
pub mod timestamp;

pub use directive::RouteDirective;
pub use envelope::{Provenance, RequestsEnvelope};
pub use error::{Error, Result};
pub use request::{Priority, RemoteStatus, RequestStatus, StudentRequest};
pub use source::{FetchError, RemoteSource};
