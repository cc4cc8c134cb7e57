//! Query URL construction for the museum REST API.
//!
//! # Design
//! `ArticClient` holds only a `base_url` and carries no mutable state between
//! calls. `query_url` is a pure function of its inputs: the same kind,
//! characteristics, and projection flag always produce the same string. The
//! client never touches the network — fetching is the `Transport`
//! collaborator's job, so URL grammar stays deterministic and testable.
//!
//! Two grammars share the one entry point. The four endpoint kinds
//! (`Exhibit`, `Image`, `Artist`, `Artwork`) use the generic resource
//! grammar: `/{endpoint}/{id}` for one characteristic, `/{endpoint}?ids=`
//! for several, plus an optional `fields=` projection. The three search
//! kinds produce fixed query-parameter URLs and ignore the projection flag.

use crate::error::ApiError;

/// Production base of the Art Institute of Chicago REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Page size applied to artworks-by-artist and artist-page searches.
const SEARCH_PAGE_SIZE: u32 = 10;

/// Minimum fields needed to hydrate an `Exhibition`.
const EXHIBIT_FIELDS: &str =
    "api_model,api_link,id,title,short_description,image_url,gallery_title,artwork_ids,image_id";

/// Minimum fields needed to resolve an image URL.
const IMAGE_FIELDS: &str = "id,api_model,api_link,title,image_id";

/// Minimum fields needed to hydrate an `Artist`.
const AGENT_FIELDS: &str = "api_model,api_link,id,title,death_date,birth_date,description";

/// Minimum fields needed to hydrate an `Artwork`.
const ARTWORK_FIELDS: &str = "api_model,api_link,id,title,image_id,artist_id,artist_display,\
     date_display,short_description,alt_titles,date_start,date_end,place_of_origin,description,\
     medium_display,artist_ids,artist_titles,style_title,classification_title";

/// Which endpoint (or fixed search) a query URL targets.
///
/// Closed enumeration: `query_url` dispatches on it exhaustively, so a new
/// kind is a compile-time event, never a silently unhandled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// The `exhibitions` endpoint.
    Exhibit,
    /// The `images` endpoint, used to resolve IIIF metadata.
    Image,
    /// The `agents` endpoint, which serves artists.
    Artist,
    /// The `artworks` endpoint.
    Artwork,
    /// Search for exhibitions flagged as featured; the single
    /// characteristic is the page-size limit.
    FeaturedExhibits,
    /// Search for artworks attributed to a given artist id.
    ArtworkByArtist,
    /// Page through agents flagged as artists; the single characteristic
    /// is the page number.
    RandomArtistPage,
}

/// Stateless builder of museum API query URLs.
#[derive(Debug, Clone)]
pub struct ArticClient {
    base_url: String,
}

impl ArticClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the query URL for `kind` from an ordered characteristics list
    /// (resource ids, or the search kind's parameter).
    ///
    /// When `required_fields_only` is set and `kind` is one of the four
    /// endpoint kinds, the kind-specific `fields=` projection is appended,
    /// with `&` if a `?ids=` clause is already present, `?` otherwise.
    ///
    /// # Errors
    /// `InvalidArgument` if `characteristics` is empty, or if a
    /// fixed-shape search kind receives more than one characteristic.
    pub fn query_url(
        &self,
        kind: QueryKind,
        characteristics: &[String],
        required_fields_only: bool,
    ) -> Result<String, ApiError> {
        if characteristics.is_empty() {
            return Err(ApiError::InvalidArgument(
                "characteristics must contain at least one value".to_string(),
            ));
        }
        let joined = characteristics.join(",");

        let (endpoint, fields) = match kind {
            QueryKind::Exhibit => ("exhibitions", EXHIBIT_FIELDS),
            QueryKind::Image => ("images", IMAGE_FIELDS),
            QueryKind::Artist => ("agents", AGENT_FIELDS),
            QueryKind::Artwork => ("artworks", ARTWORK_FIELDS),
            QueryKind::FeaturedExhibits => {
                let limit = exactly_one(characteristics, "the page-size limit")?;
                return Ok(format!(
                    "{}/exhibitions/search?query[term][is_featured]=true&page=1&limit={limit}",
                    self.base_url
                ));
            }
            QueryKind::ArtworkByArtist => {
                return Ok(format!(
                    "{}/artworks/search?query[term][artist_id]={joined}&page=1&limit={SEARCH_PAGE_SIZE}",
                    self.base_url
                ));
            }
            QueryKind::RandomArtistPage => {
                let page = exactly_one(characteristics, "the page number")?;
                return Ok(format!(
                    "{}/agents?query[term][is_artist]=true&page={page}&limit={SEARCH_PAGE_SIZE}",
                    self.base_url
                ));
            }
        };

        // Singular path for one id, batched ids= clause for several.
        let mut url = if characteristics.len() > 1 {
            format!("{}/{endpoint}?ids={joined}", self.base_url)
        } else {
            format!("{}/{endpoint}/{joined}", self.base_url)
        };

        if required_fields_only {
            url.push(if characteristics.len() > 1 { '&' } else { '?' });
            url.push_str("fields=");
            url.push_str(fields);
        }

        Ok(url)
    }
}

/// Reject fixed-shape searches called with more than one characteristic.
fn exactly_one<'a>(characteristics: &'a [String], what: &str) -> Result<&'a str, ApiError> {
    match characteristics {
        [only] => Ok(only.as_str()),
        _ => Err(ApiError::InvalidArgument(format!(
            "this search takes exactly one characteristic ({what}), got {}",
            characteristics.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ArticClient {
        ArticClient::new(DEFAULT_BASE_URL)
    }

    fn chars(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn singular_artwork_url_includes_fields() {
        let url = client()
            .query_url(QueryKind::Artwork, &chars(&["129884"]), true)
            .unwrap();
        assert_eq!(
            url,
            format!("{DEFAULT_BASE_URL}/artworks/129884?fields={ARTWORK_FIELDS}")
        );
    }

    #[test]
    fn batched_artwork_url_joins_fields_with_ampersand() {
        let url = client()
            .query_url(QueryKind::Artwork, &chars(&["1", "2", "3"]), true)
            .unwrap();
        assert_eq!(
            url,
            format!("{DEFAULT_BASE_URL}/artworks?ids=1,2,3&fields={ARTWORK_FIELDS}")
        );
    }

    #[test]
    fn singular_without_projection_has_no_query_string() {
        let url = client()
            .query_url(QueryKind::Image, &chars(&["82a87cf0"]), false)
            .unwrap();
        assert_eq!(url, format!("{DEFAULT_BASE_URL}/images/82a87cf0"));
    }

    #[test]
    fn exhibit_and_artist_use_their_endpoints() {
        let url = client()
            .query_url(QueryKind::Exhibit, &chars(&["2100"]), false)
            .unwrap();
        assert_eq!(url, format!("{DEFAULT_BASE_URL}/exhibitions/2100"));

        let url = client()
            .query_url(QueryKind::Artist, &chars(&["33890", "34946"]), false)
            .unwrap();
        assert_eq!(url, format!("{DEFAULT_BASE_URL}/agents?ids=33890,34946"));
    }

    #[test]
    fn featured_exhibits_builds_fixed_search() {
        let url = client()
            .query_url(QueryKind::FeaturedExhibits, &chars(&["10"]), true)
            .unwrap();
        assert_eq!(
            url,
            format!(
                "{DEFAULT_BASE_URL}/exhibitions/search?query[term][is_featured]=true&page=1&limit=10"
            )
        );
    }

    #[test]
    fn featured_exhibits_rejects_two_characteristics() {
        let err = client()
            .query_url(QueryKind::FeaturedExhibits, &chars(&["10", "20"]), true)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn artwork_by_artist_builds_term_filter() {
        let url = client()
            .query_url(QueryKind::ArtworkByArtist, &chars(&["33890"]), true)
            .unwrap();
        assert_eq!(
            url,
            format!(
                "{DEFAULT_BASE_URL}/artworks/search?query[term][artist_id]=33890&page=1&limit=10"
            )
        );
    }

    #[test]
    fn random_artist_page_uses_characteristic_as_page() {
        let url = client()
            .query_url(QueryKind::RandomArtistPage, &chars(&["42"]), true)
            .unwrap();
        assert_eq!(
            url,
            format!("{DEFAULT_BASE_URL}/agents?query[term][is_artist]=true&page=42&limit=10")
        );
    }

    #[test]
    fn empty_characteristics_fail_for_every_kind() {
        let kinds = [
            QueryKind::Exhibit,
            QueryKind::Image,
            QueryKind::Artist,
            QueryKind::Artwork,
            QueryKind::FeaturedExhibits,
            QueryKind::ArtworkByArtist,
            QueryKind::RandomArtistPage,
        ];
        for kind in kinds {
            let err = client().query_url(kind, &[], true).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidArgument(_)),
                "{kind:?} accepted an empty characteristics list"
            );
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ArticClient::new("https://api.artic.edu/api/v1/");
        let url = client
            .query_url(QueryKind::Artwork, &chars(&["1"]), false)
            .unwrap();
        assert_eq!(url, format!("{DEFAULT_BASE_URL}/artworks/1"));
    }

    #[test]
    fn same_inputs_produce_same_url() {
        let a = client()
            .query_url(QueryKind::Exhibit, &chars(&["5", "7"]), true)
            .unwrap();
        let b = client()
            .query_url(QueryKind::Exhibit, &chars(&["5", "7"]), true)
            .unwrap();
        assert_eq!(a, b);
    }
}
