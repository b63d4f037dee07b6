//! Typed access to the headless CMS that backs the consulting site.
//!
//! The CMS exposes content as GraphQL documents: a flat list of link records
//! describing every published entry, single content items addressed by slug,
//! and the shared header/footer blocks. This crate owns the typed shapes of
//! that content, the pure path resolution used to enumerate article routes,
//! and (behind the `ssr` feature) the HTTP client that performs the fetches.

pub mod paths;
pub mod types;
pub mod wire;

#[cfg(feature = "ssr")]
pub mod client;

use thiserror::Error;

/// Failures surfaced by content-source operations.
///
/// Absent shared blocks are not errors; they decode to `None`. A missing
/// article item is an error because every resolved article route must map to
/// exactly one fetchable item.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CmsError {
    #[error("no content item for slug '{slug}'")]
    NotFound { slug: String },
    #[error("content source request failed: {0}")]
    Transport(String),
    #[error("content source rejected the query: {0}")]
    Response(String),
    #[error("failed to decode content payload: {0}")]
    Decode(String),
}
