//! Error types for the museum collection client.
//!
//! # Design
//! The URL builders and the hydrator get separate variants because callers
//! frequently distinguish "I handed the builder bad inputs"
//! (`InvalidArgument`, `RangeViolation`) from "the API handed back a payload
//! that does not match the kind I asked for" (`SchemaViolation`). Transport
//! failures stay opaque: the core carries the message along without
//! inspecting it.

use std::fmt;

/// Errors returned by `ArticClient` URL builders and `ResourceLoader`
/// hydration methods.
#[derive(Debug)]
pub enum ApiError {
    /// A query was constructed with an unusable characteristics list, e.g.
    /// an empty id list or the wrong count for a fixed-shape search.
    InvalidArgument(String),

    /// An image-transform parameter fell outside its documented range.
    RangeViolation(String),

    /// The fetched record's `api_model` tag does not match the resource
    /// kind the hydration entry point expected.
    SchemaViolation {
        expected: &'static str,
        found: String,
    },

    /// The payload could not be deserialized into its declared schema
    /// (response envelope or per-resource record).
    DeserializationError(String),

    /// The injected transport failed to fetch or decode; opaque to the core.
    TransportFailure(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
            ApiError::RangeViolation(msg) => {
                write!(f, "range violation: {msg}")
            }
            ApiError::SchemaViolation { expected, found } => {
                write!(
                    f,
                    "schema violation: expected api_model `{expected}`, found `{found}`"
                )
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::TransportFailure(msg) => {
                write!(f, "transport failure: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
