//! In-memory mock of the museum collection API.
//!
//! Serves a fixed fixture set with the real API's response shapes: `data`
//! is a single object on `/{endpoint}/{id}` and an array on
//! `/{endpoint}?ids=...` (even for one id), search endpoints return id
//! stubs, and image responses carry `config.iiif_url`. Fixtures are seeded
//! once and read-only; the cross-references between artworks, agents,
//! exhibitions, and images are consistent so client hydration chains
//! resolve end to end.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

/// IIIF base advertised in every `config` block.
pub const IIIF_URL: &str = "https://www.artic.edu/iiif/2";

/// Image id fixtures, valid UUIDs so the client's schema accepts them.
pub const IMAGE_GRANDE_JATTE: &str = "1adf2696-8489-499b-cad2-821d7fde4b33";
pub const IMAGE_BEDROOM: &str = "25c31d8d-21a4-9ea1-1d73-6a2eca4dda7e";
pub const IMAGE_WATER_LILIES: &str = "3c27b499-af56-f0d5-93b5-a7f2f1ad5813";
pub const IMAGE_BEDROOMS_SHOW: &str = "528aca54-e266-9ec9-0e01-bd3ee6a77150";

/// The seeded collection, keyed by id. `BTreeMap` keeps listing order
/// deterministic for the paged agents search.
pub struct Museum {
    artworks: BTreeMap<u64, Value>,
    agents: BTreeMap<u64, Value>,
    exhibitions: BTreeMap<u64, Value>,
    images: BTreeMap<Uuid, Value>,
}

pub type Db = Arc<Museum>;

impl Museum {
    pub fn seeded() -> Self {
        let mut artworks = BTreeMap::new();
        artworks.insert(
            129884,
            json!({
                "api_model": "artworks",
                "api_link": "https://api.artic.edu/api/v1/artworks/129884",
                "id": 129884,
                "title": "A Sunday on La Grande Jatte — 1884",
                "image_id": IMAGE_GRANDE_JATTE,
                "artist_id": 40610,
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "date_display": "1884-86",
                "short_description": "Seurat's pointillist scene on the Seine.",
                "alt_titles": null,
                "date_start": 1884,
                "date_end": 1886,
                "place_of_origin": "France",
                "description": "Georges Seurat built the scene from tiny dabs of color.",
                "medium_display": "Oil on canvas",
                "artist_ids": [40610],
                "artist_titles": ["Georges Seurat"],
                "style_title": "Post-Impressionism",
                "classification_title": "painting"
            }),
        );
        artworks.insert(
            28560,
            json!({
                "api_model": "artworks",
                "api_link": "https://api.artic.edu/api/v1/artworks/28560",
                "id": 28560,
                "title": "The Bedroom",
                "image_id": IMAGE_BEDROOM,
                "artist_id": 33890,
                "artist_display": "Vincent van Gogh\nDutch, 1853-1890",
                "date_display": "1889",
                "short_description": "Van Gogh's bedroom at Arles, second version.",
                "alt_titles": null,
                "date_start": 1889,
                "date_end": 1889,
                "place_of_origin": "Saint-Rémy-de-Provence",
                "description": "One of three versions of the artist's bedroom.",
                "medium_display": "Oil on canvas",
                "artist_ids": [33890],
                "artist_titles": ["Vincent van Gogh"],
                "style_title": "Post-Impressionism",
                "classification_title": "painting"
            }),
        );
        artworks.insert(
            16568,
            json!({
                "api_model": "artworks",
                "api_link": "https://api.artic.edu/api/v1/artworks/16568",
                "id": 16568,
                "title": "Water Lilies",
                "image_id": IMAGE_WATER_LILIES,
                "artist_id": 34946,
                "artist_display": "Claude Monet\nFrench, 1840-1926",
                "date_display": "1906",
                "short_description": "The pond at Giverny.",
                "alt_titles": null,
                "date_start": 1906,
                "date_end": 1906,
                "place_of_origin": "France",
                "description": "Part of Monet's late series of water landscapes.",
                "medium_display": "Oil on canvas",
                "artist_ids": [34946],
                "artist_titles": ["Claude Monet"],
                "style_title": "Impressionism",
                "classification_title": "painting"
            }),
        );
        // No image_id: exercises the placeholder path in clients.
        artworks.insert(
            64818,
            json!({
                "api_model": "artworks",
                "api_link": "https://api.artic.edu/api/v1/artworks/64818",
                "id": 64818,
                "title": "Self-Portrait",
                "image_id": null,
                "artist_id": 33890,
                "artist_display": "Vincent van Gogh\nDutch, 1853-1890",
                "date_display": "1887",
                "short_description": null,
                "alt_titles": null,
                "date_start": 1887,
                "date_end": 1887,
                "place_of_origin": "Paris",
                "description": null,
                "medium_display": "Oil on artist's board, mounted on cradled panel",
                "artist_ids": [33890],
                "artist_titles": ["Vincent van Gogh"],
                "style_title": "Post-Impressionism",
                "classification_title": "painting"
            }),
        );

        let mut agents = BTreeMap::new();
        agents.insert(
            33890,
            json!({
                "api_model": "agents",
                "api_link": "https://api.artic.edu/api/v1/agents/33890",
                "id": 33890,
                "title": "Vincent van Gogh",
                "birth_date": 1853,
                "death_date": 1890,
                "description": "Dutch Post-Impressionist painter.",
                "is_artist": true
            }),
        );
        agents.insert(
            34946,
            json!({
                "api_model": "agents",
                "api_link": "https://api.artic.edu/api/v1/agents/34946",
                "id": 34946,
                "title": "Claude Monet",
                "birth_date": 1840,
                "death_date": 1926,
                "description": "Founder of French Impressionist painting.",
                "is_artist": true
            }),
        );
        agents.insert(
            40610,
            json!({
                "api_model": "agents",
                "api_link": "https://api.artic.edu/api/v1/agents/40610",
                "id": 40610,
                "title": "Georges Seurat",
                "birth_date": 1859,
                "death_date": 1891,
                "description": null,
                "is_artist": true
            }),
        );

        let mut exhibitions = BTreeMap::new();
        exhibitions.insert(
            1059,
            json!({
                "api_model": "exhibitions",
                "api_link": "https://api.artic.edu/api/v1/exhibitions/1059",
                "id": 1059,
                "title": "Monet and Chicago",
                "short_description": "Monet's long relationship with the city.",
                "image_url": "https://www.artic.edu/assets/monet-hero.jpg",
                "gallery_title": "Regenstein Hall",
                "artwork_ids": [16568],
                "image_id": null,
                "is_featured": true
            }),
        );
        exhibitions.insert(
            2100,
            json!({
                "api_model": "exhibitions",
                "api_link": "https://api.artic.edu/api/v1/exhibitions/2100",
                "id": 2100,
                "title": "Van Gogh's Bedrooms",
                "short_description": "All three versions of the bedroom, together.",
                "image_url": "https://www.artic.edu/assets/bedrooms-hero.jpg",
                "gallery_title": "Regenstein Hall",
                "artwork_ids": [28560, 64818],
                "image_id": IMAGE_BEDROOMS_SHOW,
                "is_featured": true
            }),
        );
        exhibitions.insert(
            2650,
            json!({
                "api_model": "exhibitions",
                "api_link": "https://api.artic.edu/api/v1/exhibitions/2650",
                "id": 2650,
                "title": "Seurat and the Season",
                "short_description": "Studies for the Grande Jatte.",
                "image_url": null,
                "gallery_title": "Gallery 240",
                "artwork_ids": [129884],
                "image_id": null,
                "is_featured": false
            }),
        );

        let mut images = BTreeMap::new();
        for (uuid, title) in [
            (IMAGE_GRANDE_JATTE, "A Sunday on La Grande Jatte — 1884"),
            (IMAGE_BEDROOM, "The Bedroom"),
            (IMAGE_WATER_LILIES, "Water Lilies"),
            (IMAGE_BEDROOMS_SHOW, "Van Gogh's Bedrooms installation view"),
        ] {
            let id: Uuid = uuid.parse().expect("fixture uuid");
            images.insert(
                id,
                json!({
                    "api_model": "images",
                    "api_link": format!("https://api.artic.edu/api/v1/images/{uuid}"),
                    "id": uuid,
                    "title": title,
                    "image_id": null
                }),
            );
        }

        Self {
            artworks,
            agents,
            exhibitions,
            images,
        }
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(Museum::seeded());
    Router::new()
        .route("/api/v1/artworks", get(list_artworks))
        .route("/api/v1/artworks/search", get(search_artworks))
        .route("/api/v1/artworks/{id}", get(get_artwork))
        .route("/api/v1/agents", get(list_agents))
        .route("/api/v1/agents/{id}", get(get_agent))
        .route("/api/v1/exhibitions", get(list_exhibitions))
        .route("/api/v1/exhibitions/search", get(search_exhibitions))
        .route("/api/v1/exhibitions/{id}", get(get_exhibition))
        .route("/api/v1/images/{id}", get(get_image))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type Params = Query<std::collections::HashMap<String, String>>;

/// `{ data, config }` wrapper every handler responds with.
fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "data": data, "config": { "iiif_url": IIIF_URL } }))
}

/// Select the records named by a comma-separated `ids` parameter, in the
/// API's own (ascending id) order. Unknown ids are skipped, as upstream
/// does. `data` is always an array here, even for a single id.
fn by_ids(store: &BTreeMap<u64, Value>, ids: &str) -> Vec<Value> {
    let requested: Vec<u64> = ids
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect();
    store
        .iter()
        .filter(|(id, _)| requested.contains(id))
        .map(|(_, record)| record.clone())
        .collect()
}

async fn list_artworks(State(db): State<Db>, Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let ids = params.get("ids").ok_or(StatusCode::BAD_REQUEST)?;
    Ok(envelope(Value::Array(by_ids(&db.artworks, ids))))
}

async fn get_artwork(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    db.artworks
        .get(&id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Serves both shapes of `/agents`: the `ids=` batch form and the
/// `query[term][is_artist]=true&page=&limit=` paged search the client's
/// artist-page flow issues.
async fn list_agents(State(db): State<Db>, Query(params): Params) -> Result<Json<Value>, StatusCode> {
    if let Some(ids) = params.get("ids") {
        return Ok(envelope(Value::Array(by_ids(&db.agents, ids))));
    }
    if params.get("query[term][is_artist]").map(String::as_str) == Some("true") {
        let page: usize = parse_param(&params, "page", 1)?;
        let limit: usize = parse_param(&params, "limit", 10)?;
        let stubs: Vec<Value> = db
            .agents
            .values()
            .skip(page.saturating_sub(1) * limit)
            .take(limit)
            .cloned()
            .collect();
        return Ok(envelope(Value::Array(stubs)));
    }
    Err(StatusCode::BAD_REQUEST)
}

async fn get_agent(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    db.agents
        .get(&id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_exhibitions(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Json<Value>, StatusCode> {
    let ids = params.get("ids").ok_or(StatusCode::BAD_REQUEST)?;
    Ok(envelope(Value::Array(by_ids(&db.exhibitions, ids))))
}

async fn get_exhibition(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    db.exhibitions
        .get(&id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Featured-exhibits term search: id stubs for `is_featured` exhibitions,
/// capped at `limit`.
async fn search_exhibitions(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Json<Value>, StatusCode> {
    if params.get("query[term][is_featured]").map(String::as_str) != Some("true") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let limit: usize = parse_param(&params, "limit", 10)?;
    let stubs: Vec<Value> = db
        .exhibitions
        .values()
        .filter(|record| record["is_featured"] == true)
        .take(limit)
        .map(|record| json!({ "id": record["id"], "title": record["title"] }))
        .collect();
    Ok(envelope(Value::Array(stubs)))
}

/// Artworks-by-artist term search: id stubs for the artist's works.
async fn search_artworks(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Json<Value>, StatusCode> {
    let artist_id: u64 = params
        .get("query[term][artist_id]")
        .and_then(|id| id.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let limit: usize = parse_param(&params, "limit", 10)?;
    let stubs: Vec<Value> = db
        .artworks
        .values()
        .filter(|record| record["artist_id"] == artist_id)
        .take(limit)
        .map(|record| json!({ "id": record["id"], "title": record["title"] }))
        .collect();
    Ok(envelope(Value::Array(stubs)))
}

async fn get_image(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Value>, StatusCode> {
    db.images
        .get(&id)
        .cloned()
        .map(envelope)
        .ok_or(StatusCode::NOT_FOUND)
}

fn parse_param(
    params: &std::collections::HashMap<String, String>,
    name: &str,
    default: usize,
) -> Result<usize, StatusCode> {
    match params.get(name) {
        Some(raw) => raw.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(default),
    }
}
