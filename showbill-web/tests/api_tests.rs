//! Integration tests for showbill-web pages
//!
//! Each test builds the router over a fresh temporary database loaded with
//! the demo data:
//! - venues 1 The Musical Hop, 2 The Dueling Pianos Bar, 3 Park Square
//! - artists 1 Guns N Petals, 2 Matt Quevedo, 3 The Wild Sax Band

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use showbill_common::db::init_database_file;
use showbill_common::db::shows::list_shows;
use showbill_common::db::venues::get_venue;
use showbill_common::seed::seed_demo_data;
use showbill_web::{build_router, AppState};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: seeded database in a temp dir (keep the TempDir alive)
async fn setup() -> (TempDir, SqlitePool, Router) {
    let dir = TempDir::new().unwrap();
    let pool = init_database_file(&dir.path().join("web.db")).await.unwrap();
    assert!(seed_demo_data(&pool).await.unwrap());
    let app = build_router(AppState::new(pool.clone()));
    (dir, pool, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Minimal urlencoding for test values
fn encode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace(':', "%3A")
        .replace('/', "%2F")
        .replace(' ', "+")
}

fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn new_venue_fields<'a>(name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", "Seattle"),
        ("state", "WA"),
        ("address", "500 Pine Street"),
        ("phone", "206-555-0199"),
        ("genres", "Jazz"),
        ("genres", "Blues"),
        ("website_link", "https://bluemoon.example.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "Trios on weeknights"),
    ]
}

// =============================================================================
// Home, health, fallback
// =============================================================================

#[tokio::test]
async fn test_home_page() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("action=\"/venues/search\""));
    assert!(body.contains("action=\"/artists/search\""));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "showbill-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/no/such/page")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404 Not Found"));
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venue_directory_grouped_by_area() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/venues")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let ny = body.find("New York, NY").expect("New York area");
    let sf = body.find("San Francisco, CA").expect("San Francisco area");
    assert!(ny < sf);
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_venue_search_hop_and_music() {
    let (_dir, _pool, app) = setup().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/search", &[("search_term", "Hop")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "Hop": 1"#));
    assert!(body.contains("The Musical Hop"));

    let response = app
        .oneshot(post_form("/venues/search", &[("search_term", "Music")]))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "Music": 2"#));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
    assert!(!body.contains("Dueling Pianos"));
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/venues/3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains(r#"href="/artists/3""#));
}

#[tokio::test]
async fn test_venue_detail_missing_or_malformed_id() {
    let (_dir, _pool, app) = setup().await;

    let response = app.clone().oneshot(get("/venues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404 Not Found"));

    let response = app.oneshot(get("/venues/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_venue_flashes_success_and_persists() {
    let (_dir, pool, app) = setup().await;

    let response = app
        .oneshot(post_form("/venues/create", &new_venue_fields("The Blue Moon")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Blue Moon was successfully listed!"));

    let venue = get_venue(&pool, 4).await.unwrap().expect("new venue stored");
    assert_eq!(venue.name, "The Blue Moon");
    assert_eq!(venue.genres, vec!["Jazz".to_string(), "Blues".to_string()]);
    assert!(venue.seeking_talent);
    assert_eq!(venue.website_link.as_deref(), Some("https://bluemoon.example.com"));
}

#[tokio::test]
async fn test_create_venue_missing_name_rerenders_form() {
    let (_dir, pool, app) = setup().await;

    let response = app
        .oneshot(post_form("/venues/create", &new_venue_fields("   ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Name is required"));
    // Submitted values survive the round trip
    assert!(body.contains(r#"value="500 Pine Street""#));
    assert!(get_venue(&pool, 4).await.unwrap().is_none());
}

#[tokio::test]
async fn test_edit_venue_round_trip() {
    let (_dir, pool, app) = setup().await;

    let response = app.clone().oneshot(get("/venues/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"value="The Musical Hop""#));

    let response = app
        .oneshot(post_form("/venues/1/edit", &new_venue_fields("The Musical Hop II")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Musical Hop II was successfully edited!"));
    assert!(body.contains("Seattle, WA"));

    let venue = get_venue(&pool, 1).await.unwrap().unwrap();
    assert_eq!(venue.id, 1);
    assert_eq!(venue.name, "The Musical Hop II");
    assert_eq!(venue.address, "500 Pine Street");
}

#[tokio::test]
async fn test_edit_missing_venue_is_not_found() {
    let (_dir, _pool, app) = setup().await;

    let response = app.clone().oneshot(get("/venues/42/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(post_form("/venues/42/edit", &new_venue_fields("Ghost Hall")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Missing record wins over an invalid body
    let response = app
        .clone()
        .oneshot(post_form("/venues/42/edit", &new_venue_fields("")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post_form("/artists/42/edit", &[("name", ""), ("state", "ZZ")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_without_shows() {
    let (_dir, pool, app) = setup().await;
    let response = app
        .clone()
        .oneshot(post_form("/venues/create", &new_venue_fields("The Blue Moon")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/venues/4")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(get_venue(&pool, 4).await.unwrap().is_none());

    let response = app.oneshot(get("/venues/4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_with_shows_is_refused() {
    let (_dir, pool, app) = setup().await;

    let delete = Request::builder()
        .method("DELETE")
        .uri("/venues/3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(delete).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
    assert!(get_venue(&pool, 3).await.unwrap().is_some());
    assert_eq!(list_shows(&pool).await.unwrap().len(), 6);
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artist_listing_and_search() {
    let (_dir, _pool, app) = setup().await;

    let response = app.clone().oneshot(get("/artists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let guns = body.find("Guns N Petals").unwrap();
    let sax = body.find("The Wild Sax Band").unwrap();
    assert!(guns < sax);

    let response = app
        .oneshot(post_form("/artists/search", &[("search_term", "band")]))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "band": 1"#));
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("3 upcoming"));
}

#[tokio::test]
async fn test_artist_detail_lists_venues_played() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/artists/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains(r#"href="/venues/1""#));
}

#[tokio::test]
async fn test_create_and_edit_artist() {
    let (_dir, _pool, app) = setup().await;
    let fields = [
        ("name", "Nina Keys"),
        ("city", "Austin"),
        ("state", "TX"),
        ("phone", "512-555-0142"),
        ("genres", "Soul"),
    ];

    let response = app
        .clone()
        .oneshot(post_form("/artists/create", &fields))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist Nina Keys was successfully listed!"));

    let mut edited = fields.to_vec();
    edited[0] = ("name", "Nina Keys Trio");
    let response = app
        .clone()
        .oneshot(post_form("/artists/4/edit", &edited))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist Nina Keys Trio was successfully edited!"));

    let response = app.oneshot(get("/artists/4")).await.unwrap();
    assert!(body_text(response).await.contains("Nina Keys Trio"));
}

#[tokio::test]
async fn test_create_artist_unknown_state_is_rejected() {
    let (_dir, _pool, app) = setup().await;

    let response = app
        .oneshot(post_form(
            "/artists/create",
            &[
                ("name", "Nina Keys"),
                ("city", "Austin"),
                ("state", "ZZ"),
                ("phone", "512-555-0142"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("flash-error"));
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_show_listing_ordered_by_start_time() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let first = body.find("Guns N Petals").unwrap();
    let later = body.find("The Wild Sax Band").unwrap();
    assert!(first < later);
}

#[tokio::test]
async fn test_show_create_form_prefills_start_time() {
    let (_dir, _pool, app) = setup().await;

    let response = app.oneshot(get("/shows/create")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let year = Utc::now().format("%Y").to_string();
    assert!(body.contains(&format!(r#"name="start_time" value="{}-"#, year)));
}

#[tokio::test]
async fn test_show_one_hour_ahead_counts_as_upcoming() {
    let (_dir, _pool, app) = setup().await;
    let start = (Utc::now() + Duration::hours(1))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let response = app
        .clone()
        .oneshot(post_form(
            "/shows/create",
            &[("artist_id", "1"), ("venue_id", "2"), ("start_time", start.as_str())],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Show was successfully listed!"));

    // Dueling Pianos had one upcoming show before
    let response = app.oneshot(get("/venues/2")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("2 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
}

#[tokio::test]
async fn test_show_with_missing_venue_is_rejected() {
    let (_dir, pool, app) = setup().await;

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &[
                ("artist_id", "1"),
                ("venue_id", "99"),
                ("start_time", "2035-06-01 20:00:00"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Venue 99 does not exist"));
    assert_eq!(list_shows(&pool).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_show_with_bad_start_time_is_rejected() {
    let (_dir, _pool, app) = setup().await;

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &[("artist_id", "1"), ("venue_id", "1"), ("start_time", "soon")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Invalid start time: soon"));
}
