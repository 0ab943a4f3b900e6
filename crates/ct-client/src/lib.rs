//! CDISC Library client for Controlled Terminology packages.
//!
//! Two read-only endpoints are used: the package listing (for version
//! resolution) and the package body itself. Both require an `api-key`
//! header. Failures abort immediately; there is no retry or caching.

pub mod client;
pub mod error;
pub mod resolve;
mod wire;

pub use client::LibraryClient;
pub use error::{ClientError, Result};
pub use resolve::latest_for;
