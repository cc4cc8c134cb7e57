//! Hydrated domain records for the museum collection.
//!
//! # Design
//! These are the immutable value objects handed to rendering collaborators.
//! They are constructed once per hydration call and never mutated; resolved
//! image URLs are baked in at hydration time. The raw input schemas the
//! hydrator deserializes live next to the hydration code in `loader.rs`;
//! what is exported here is only the finished shape.

use uuid::Uuid;

use crate::client::QueryKind;

/// Fallback card image for records without a resolvable image of their own.
/// Rendering collaborators substitute this whenever a record's `image_url`
/// is `None`.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://www.artic.edu/iiif/2/82a87cf0-6082-a7f7-c2cf-0fc9283ed966/full/843,/0/default.jpg";

/// The hydratable resource kinds.
///
/// Closed enumeration: batch assembly dispatches on it exhaustively, so a
/// record can never be silently skipped for having an unrecognized kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Exhibit,
    Artist,
    Artwork,
}

impl ResourceKind {
    /// The query kind used to fetch this resource.
    pub fn query_kind(self) -> QueryKind {
        match self {
            ResourceKind::Exhibit => QueryKind::Exhibit,
            ResourceKind::Artist => QueryKind::Artist,
            ResourceKind::Artwork => QueryKind::Artwork,
        }
    }

    /// The `api_model` tag every payload of this kind must carry.
    pub fn tag(self) -> &'static str {
        match self {
            ResourceKind::Exhibit => "exhibitions",
            ResourceKind::Artist => "agents",
            ResourceKind::Artwork => "artworks",
        }
    }
}

/// A hydrated record of any kind, as produced by batch assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Exhibition(Exhibition),
    Artist(Artist),
    Artwork(Artwork),
}

impl Resource {
    pub fn id(&self) -> u64 {
        match self {
            Resource::Exhibition(e) => e.id,
            Resource::Artist(a) => a.id,
            Resource::Artwork(a) => a.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Resource::Exhibition(e) => &e.title,
            Resource::Artist(a) => &a.title,
            Resource::Artwork(a) => &a.title,
        }
    }
}

/// An artwork and its image, artist, and creation details.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// REST API link for this artwork.
    pub api_link: Option<String>,
    pub id: u64,
    pub title: String,
    /// Preferred image id on the IIIF server, when the artwork has one.
    pub image_id: Option<Uuid>,
    /// Resolved IIIF URL; `None` exactly when `image_id` is `None`.
    pub image_url: Option<String>,
    /// Preferred artist/culture id.
    pub artist_id: Option<u64>,
    /// Readable creator description: names, nationality, lifespan.
    pub artist_display: Option<String>,
    /// Free-text description of the creation period.
    pub date_display: Option<String>,
    pub short_description: Option<String>,
    pub alt_titles: Option<Vec<String>>,
    /// Start year of the creation period.
    pub date_start: Option<i32>,
    /// End year of the creation period.
    pub date_end: Option<i32>,
    pub place_of_origin: Option<String>,
    pub description: Option<String>,
    /// Substances or materials used in the creation.
    pub medium_display: Option<String>,
    /// All artist/culture ids associated with this artwork.
    pub artist_ids: Vec<u64>,
    /// Names matching `artist_ids`.
    pub artist_titles: Vec<String>,
    pub style_title: Option<String>,
    pub classification_title: Option<String>,
}

/// An artist (upstream: agent) with a sample of their attributed works.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// REST API link for this artist.
    pub api_link: Option<String>,
    pub id: u64,
    /// The artist's name.
    pub title: String,
    pub birth_date: Option<i32>,
    pub death_date: Option<i32>,
    pub description: Option<String>,
    /// Artworks attributed to this artist, resolved by a secondary search.
    /// Empty when the search finds nothing; never from the primary payload.
    pub known_works: Vec<Artwork>,
}

/// An exhibition and the artworks it gathered.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibition {
    /// REST API link for this exhibition.
    pub api_link: Option<String>,
    pub id: u64,
    pub title: String,
    pub short_description: Option<String>,
    /// Hero image from the museum website, distinct from the IIIF image.
    pub hero_image_url: Option<String>,
    /// Gallery that mainly housed the exhibition.
    pub gallery_title: Option<String>,
    /// Ids of artworks shown; unresolved unless a caller expands them.
    pub artwork_ids: Vec<u64>,
    /// Preferred image id on the IIIF server, when one exists.
    pub image_id: Option<Uuid>,
    /// Resolved IIIF URL; `None` exactly when `image_id` is `None`.
    pub image_url: Option<String>,
}
