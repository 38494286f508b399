//! finsecure-api - HTTP client for the FinSecure advisory backend
//!
//! Stateless request/response wrapper around the five backend endpoints.
//! Every call is one-shot: no retries, no caching, no timeout beyond the
//! transport default. Failures come back as [`finsecure_core::Error`] with the
//! transport vs application split described on that type.

pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ApiClient, HttpApiClient, LocalApiClient, DEFAULT_BASE_URL};
