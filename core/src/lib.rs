//! Synchronous client core for the Art Institute of Chicago collection API.
//!
//! # Overview
//! Builds REST query URLs and IIIF image URLs, fetches raw JSON through an
//! injected `Transport`, and hydrates the payloads into typed `Artwork`,
//! `Artist`, and `Exhibition` records, resolving cross-resource references
//! (preferred image URLs, an artist's known works) along the way.
//!
//! # Design
//! - `ArticClient` is stateless — it holds only `base_url`; both URL
//!   builders are pure functions of their inputs.
//! - All I/O goes through the `Transport` trait, so the pipeline runs
//!   against a stub in unit tests and a real HTTP agent elsewhere.
//! - Response envelopes are normalized to record lists at the transport
//!   boundary; nothing downstream branches on singleton-vs-array shape.
//! - Every payload is tag-checked and schema-deserialized before field
//!   mapping; a bad record fails the batch rather than defaulting.

pub mod client;
pub mod error;
pub mod image;
pub mod loader;
pub mod transport;
pub mod types;

pub use client::{ArticClient, QueryKind, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use image::{build_image_url, ImageParams, DEFAULT_IMAGE_WIDTH};
pub use loader::ResourceLoader;
pub use transport::{ApiConfig, Envelope, Transport};
pub use types::{
    Artist, Artwork, Exhibition, Resource, ResourceKind, PLACEHOLDER_IMAGE_URL,
};
