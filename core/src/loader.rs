//! Resource hydration and batch list assembly.
//!
//! # Design
//! `ResourceLoader` is the one pipeline stage that drives the injected
//! `Transport`: it builds a URL with `ArticClient`, fetches, normalizes the
//! envelope to a record list, and hydrates each record into a typed value.
//! Hydration of a record proceeds tag check → schema deserialization →
//! optional image resolution; artists additionally resolve their known
//! works through a secondary search plus a recursive artwork batch load.
//!
//! Execution is strictly sequential: each record's secondary fetches finish
//! before the next record starts, and any failure aborts the whole batch.
//!
//! The raw input schemas live here, private: they exist to reject
//! malformed payloads at the fetch boundary, before field mapping. Most
//! fields are optional because the upstream API nulls or omits them freely;
//! `id`, `title`, and the `api_model` tag are required.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::client::{ArticClient, QueryKind};
use crate::error::ApiError;
use crate::image::{build_image_url, ImageParams, DEFAULT_IMAGE_WIDTH};
use crate::transport::{Envelope, Transport};
use crate::types::{Artist, Artwork, Exhibition, Resource, ResourceKind};

/// Raw artwork payload, as projected by the artwork fields clause.
#[derive(Debug, Deserialize)]
struct RawArtwork {
    api_link: Option<String>,
    id: u64,
    title: String,
    #[serde(default)]
    image_id: Option<Uuid>,
    #[serde(default)]
    artist_id: Option<u64>,
    #[serde(default)]
    artist_display: Option<String>,
    #[serde(default)]
    date_display: Option<String>,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    alt_titles: Option<Vec<String>>,
    #[serde(default)]
    date_start: Option<i32>,
    #[serde(default)]
    date_end: Option<i32>,
    #[serde(default)]
    place_of_origin: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    medium_display: Option<String>,
    #[serde(default)]
    artist_ids: Vec<u64>,
    #[serde(default)]
    artist_titles: Vec<String>,
    #[serde(default)]
    style_title: Option<String>,
    #[serde(default)]
    classification_title: Option<String>,
}

/// Raw agent payload.
#[derive(Debug, Deserialize)]
struct RawAgent {
    api_link: Option<String>,
    id: u64,
    title: String,
    #[serde(default)]
    birth_date: Option<i32>,
    #[serde(default)]
    death_date: Option<i32>,
    #[serde(default)]
    description: Option<String>,
}

/// Raw exhibition payload.
#[derive(Debug, Deserialize)]
struct RawExhibition {
    api_link: Option<String>,
    id: u64,
    title: String,
    #[serde(default)]
    short_description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    gallery_title: Option<String>,
    #[serde(default)]
    artwork_ids: Vec<u64>,
    #[serde(default)]
    image_id: Option<Uuid>,
}

/// Raw image metadata record; the canonical id on the IIIF server.
#[derive(Debug, Deserialize)]
struct RawImage {
    id: Uuid,
}

/// Stub returned by the search endpoints; only the id is consumed.
#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

/// Fetches and hydrates museum resources through an injected transport.
#[derive(Debug)]
pub struct ResourceLoader<T: Transport> {
    client: ArticClient,
    transport: T,
}

impl<T: Transport> ResourceLoader<T> {
    pub fn new(client: ArticClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Fetch and hydrate the resources of `kind` named by `ids`, in the
    /// order the API returns them.
    ///
    /// One URL, one fetch: singular path for one id, batched `ids=` clause
    /// for several. Each returned record is hydrated per `kind`, including
    /// its secondary fetches, before the next record is touched.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty `ids` list; any hydration or
    /// transport failure aborts the whole batch.
    pub fn load_resources(
        &self,
        kind: ResourceKind,
        ids: &[u64],
    ) -> Result<Vec<Resource>, ApiError> {
        let records = self.fetch_records(kind.query_kind(), &id_strings(ids), true)?;
        let mut resources = Vec::with_capacity(records.len());
        for record in records {
            resources.push(match kind {
                ResourceKind::Exhibit => Resource::Exhibition(self.hydrate_exhibition(record)?),
                ResourceKind::Artist => Resource::Artist(self.hydrate_artist(record)?),
                ResourceKind::Artwork => Resource::Artwork(self.hydrate_artwork(record)?),
            });
        }
        Ok(resources)
    }

    /// Typed batch load of artworks; also backs known-works resolution.
    pub fn load_artworks(&self, ids: &[u64]) -> Result<Vec<Artwork>, ApiError> {
        let records = self.fetch_records(QueryKind::Artwork, &id_strings(ids), true)?;
        records
            .into_iter()
            .map(|record| self.hydrate_artwork(record))
            .collect()
    }

    /// Typed batch load of artists, each with known works resolved.
    pub fn load_artists(&self, ids: &[u64]) -> Result<Vec<Artist>, ApiError> {
        let records = self.fetch_records(QueryKind::Artist, &id_strings(ids), true)?;
        records
            .into_iter()
            .map(|record| self.hydrate_artist(record))
            .collect()
    }

    /// Typed batch load of exhibitions.
    pub fn load_exhibitions(&self, ids: &[u64]) -> Result<Vec<Exhibition>, ApiError> {
        let records = self.fetch_records(QueryKind::Exhibit, &id_strings(ids), true)?;
        records
            .into_iter()
            .map(|record| self.hydrate_exhibition(record))
            .collect()
    }

    /// Load the currently featured exhibitions, at most `limit` of them.
    ///
    /// Two phases, as upstream requires: a featured-exhibits search yields
    /// id stubs, then the ids are batch-loaded as full exhibitions. No
    /// featured exhibitions yields an empty list.
    pub fn featured_exhibitions(&self, limit: u32) -> Result<Vec<Exhibition>, ApiError> {
        let hits =
            self.fetch_records(QueryKind::FeaturedExhibits, &[limit.to_string()], true)?;
        let ids = hit_ids(hits)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.load_exhibitions(&ids)
    }

    /// Load one page of agents flagged as artists, known works included.
    /// An out-of-range page yields an empty list.
    pub fn artist_page(&self, page: u32) -> Result<Vec<Artist>, ApiError> {
        let hits = self.fetch_records(QueryKind::RandomArtistPage, &[page.to_string()], true)?;
        let ids = hit_ids(hits)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.load_artists(&ids)
    }

    /// Hydrate one raw artwork record, resolving its image URL when the
    /// payload names an image id.
    pub fn hydrate_artwork(&self, record: Value) -> Result<Artwork, ApiError> {
        expect_tag(&record, ResourceKind::Artwork.tag())?;
        let raw: RawArtwork = deserialize_record(record)?;

        let image_url = match raw.image_id {
            Some(image_id) => Some(self.resolve_image_url(
                image_id,
                &ImageParams::with_width(DEFAULT_IMAGE_WIDTH),
            )?),
            None => None,
        };

        Ok(Artwork {
            api_link: raw.api_link,
            id: raw.id,
            title: raw.title,
            image_id: raw.image_id,
            image_url,
            artist_id: raw.artist_id,
            artist_display: raw.artist_display,
            date_display: raw.date_display,
            short_description: raw.short_description,
            alt_titles: raw.alt_titles,
            date_start: raw.date_start,
            date_end: raw.date_end,
            place_of_origin: raw.place_of_origin,
            description: raw.description,
            medium_display: raw.medium_display,
            artist_ids: raw.artist_ids,
            artist_titles: raw.artist_titles,
            style_title: raw.style_title,
            classification_title: raw.classification_title,
        })
    }

    /// Hydrate one raw agent record, resolving known works through the
    /// artworks-by-artist search. Zero search hits leave `known_works`
    /// empty; that is not an error.
    pub fn hydrate_artist(&self, record: Value) -> Result<Artist, ApiError> {
        expect_tag(&record, ResourceKind::Artist.tag())?;
        let raw: RawAgent = deserialize_record(record)?;

        let hits =
            self.fetch_records(QueryKind::ArtworkByArtist, &[raw.id.to_string()], true)?;
        let artwork_ids = hit_ids(hits)?;
        let known_works = if artwork_ids.is_empty() {
            Vec::new()
        } else {
            self.load_artworks(&artwork_ids)?
        };

        Ok(Artist {
            api_link: raw.api_link,
            id: raw.id,
            title: raw.title,
            birth_date: raw.birth_date,
            death_date: raw.death_date,
            description: raw.description,
            known_works,
        })
    }

    /// Hydrate one raw exhibition record, resolving the preferred image URL
    /// when the payload names an image id.
    pub fn hydrate_exhibition(&self, record: Value) -> Result<Exhibition, ApiError> {
        expect_tag(&record, ResourceKind::Exhibit.tag())?;
        let raw: RawExhibition = deserialize_record(record)?;

        let image_url = match raw.image_id {
            Some(image_id) => Some(self.resolve_image_url(
                image_id,
                &ImageParams::with_width(DEFAULT_IMAGE_WIDTH),
            )?),
            None => None,
        };

        Ok(Exhibition {
            api_link: raw.api_link,
            id: raw.id,
            title: raw.title,
            short_description: raw.short_description,
            hero_image_url: raw.image_url,
            gallery_title: raw.gallery_title,
            artwork_ids: raw.artwork_ids,
            image_id: raw.image_id,
            image_url,
        })
    }

    /// Resolve `image_id` to a concrete IIIF URL: fetch the image metadata
    /// (full payload, no projection) for the IIIF base and canonical id,
    /// then apply `params`.
    pub fn resolve_image_url(
        &self,
        image_id: Uuid,
        params: &ImageParams,
    ) -> Result<String, ApiError> {
        let url = self
            .client
            .query_url(QueryKind::Image, &[image_id.to_string()], false)?;
        let mut envelope = Envelope::from_value(self.transport.fetch(&url)?)?;
        let config = envelope.config.take().ok_or_else(|| {
            ApiError::DeserializationError(
                "image response carried no config.iiif_url".to_string(),
            )
        })?;
        let record = envelope.into_records().into_iter().next().ok_or_else(|| {
            ApiError::DeserializationError("image response carried no record".to_string())
        })?;
        let raw: RawImage = deserialize_record(record)?;
        build_image_url(&config.iiif_url, &raw.id.to_string(), params)
    }

    /// Build the URL for `kind`, fetch it, and normalize the envelope.
    fn fetch_records(
        &self,
        kind: QueryKind,
        characteristics: &[String],
        required_fields_only: bool,
    ) -> Result<Vec<Value>, ApiError> {
        let url = self
            .client
            .query_url(kind, characteristics, required_fields_only)?;
        let envelope = Envelope::from_value(self.transport.fetch(&url)?)?;
        Ok(envelope.into_records())
    }
}

fn id_strings(ids: &[u64]) -> Vec<String> {
    ids.iter().map(u64::to_string).collect()
}

/// Extract the ids from search-hit stubs, rejecting id-less entries.
fn hit_ids(hits: Vec<Value>) -> Result<Vec<u64>, ApiError> {
    hits.into_iter()
        .map(|hit| deserialize_record::<SearchHit>(hit).map(|h| h.id))
        .collect()
}

/// Fail with `SchemaViolation` unless the record's `api_model` tag matches.
fn expect_tag(record: &Value, expected: &'static str) -> Result<(), ApiError> {
    let found = record
        .get("api_model")
        .and_then(Value::as_str)
        .unwrap_or("<missing>");
    if found != expected {
        return Err(ApiError::SchemaViolation {
            expected,
            found: found.to_string(),
        });
    }
    Ok(())
}

fn deserialize_record<R: serde::de::DeserializeOwned>(record: Value) -> Result<R, ApiError> {
    serde_json::from_value(record).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
