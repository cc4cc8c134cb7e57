use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, IIIF_URL, IMAGE_BEDROOM};
use serde_json::Value;
use tower::ServiceExt;

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// --- singular fetches ---

#[tokio::test]
async fn get_artwork_returns_single_object_data() {
    let (status, body) = get_json("/api/v1/artworks/129884").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_object());
    assert_eq!(body["data"]["api_model"], "artworks");
    assert_eq!(body["data"]["title"], "A Sunday on La Grande Jatte — 1884");
}

#[tokio::test]
async fn get_artwork_unknown_id_is_404() {
    let (status, _) = get_json("/api/v1/artworks/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_agent_and_exhibition_round_out_the_singular_grammar() {
    let (status, body) = get_json("/api/v1/agents/33890").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Vincent van Gogh");

    let (status, body) = get_json("/api/v1/exhibitions/2100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["artwork_ids"], serde_json::json!([28560, 64818]));
}

// --- batched fetches ---

#[tokio::test]
async fn batched_ids_return_array_data_even_for_one_id() {
    let (status, body) = get_json("/api/v1/artworks?ids=129884").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);

    let (_, body) = get_json("/api/v1/artworks?ids=28560,64818&fields=api_model,id,title").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
}

#[tokio::test]
async fn unknown_ids_are_skipped_in_batches() {
    let (status, body) = get_json("/api/v1/exhibitions?ids=2100,9999").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 2100);
}

// --- searches ---

#[tokio::test]
async fn featured_search_honors_limit() {
    let (status, body) =
        get_json("/api/v1/exhibitions/search?query[term][is_featured]=true&page=1&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);

    let (_, body) =
        get_json("/api/v1/exhibitions/search?query[term][is_featured]=true&page=1&limit=10").await;
    // Fixture 2650 is not featured.
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn artworks_search_filters_by_artist() {
    let (status, body) =
        get_json("/api/v1/artworks/search?query[term][artist_id]=33890&page=1&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![28560, 64818]);
}

#[tokio::test]
async fn agents_search_pages_deterministically() {
    let (status, body) =
        get_json("/api/v1/agents?query[term][is_artist]=true&page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let first: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(first, vec![33890, 34946]);

    let (_, body) = get_json("/api/v1/agents?query[term][is_artist]=true&page=2&limit=2").await;
    let second: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(second, vec![40610]);
}

#[tokio::test]
async fn agents_without_ids_or_term_is_bad_request() {
    let (status, _) = get_json("/api/v1/agents").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- images ---

#[tokio::test]
async fn image_response_carries_iiif_config() {
    let (status, body) = get_json(&format!("/api/v1/images/{IMAGE_BEDROOM}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"]["iiif_url"], IIIF_URL);
    assert_eq!(body["data"]["id"], IMAGE_BEDROOM);
}

#[tokio::test]
async fn image_bad_uuid_is_400() {
    let (status, _) = get_json("/api/v1/images/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
