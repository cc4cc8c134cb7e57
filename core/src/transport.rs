//! The injected fetch capability and the response envelope.
//!
//! # Design
//! The core never performs I/O. Callers hand `ResourceLoader` anything
//! implementing `Transport` (a real HTTP agent in production and
//! integration tests, an in-memory stub in unit tests) and the loader
//! drives it one `fetch(url) -> JSON` call at a time.
//!
//! The museum API wraps every response in an envelope whose `data` field is
//! a single object for singular fetches and an array for batched ones.
//! `Envelope::into_records` normalizes both shapes to a list right here at
//! the boundary, so nothing downstream ever branches on cardinality.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// The fetch capability the core consumes: one URL in, one decoded JSON
/// value out. Implementations report network or decode failures as
/// `TransportFailure`.
pub trait Transport {
    fn fetch(&self, url: &str) -> Result<Value, ApiError>;
}

/// Configuration block some responses carry alongside `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the IIIF image server.
    pub iiif_url: String,
}

/// The `{ data, config? }` wrapper around every API response.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    data: Records,
    pub config: Option<ApiConfig>,
}

/// `data` arrives as one record object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Records {
    Many(Vec<Value>),
    One(Value),
}

impl Envelope {
    /// Deserialize a fetched value into an envelope, rejecting payloads
    /// without a usable `data` field.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Normalize the singleton-vs-array `data` shape to a list.
    pub fn into_records(self) -> Vec<Value> {
        match self.data {
            Records::Many(records) => records,
            Records::One(record) => vec![record],
        }
    }
}
