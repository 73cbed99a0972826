//! End-to-end smoke tests for the full terraind stack.
//!
//! Each test wires the real `SQLite` repository (in memory), the real
//! controller and the real router, then drives it with
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use terrain_adapter_http_axum::router;
use terrain_adapter_http_axum::state::AppState;
use terrain_adapter_storage_sqlite_sqlx::{Config, SqliteTerrainImageRepository};
use terrain_app::services::terrain_image_controller::TerrainImageController;
use terrain_domain::terrain_image::TerrainImage;
use tower::ServiceExt;

struct Harness {
    app: axum::Router,
    pool: SqlitePool,
}

impl Harness {
    async fn new() -> Self {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .expect("in-memory database should initialise");

        let pool = db.pool().clone();
        let repo = SqliteTerrainImageRepository::new(pool.clone());
        let app = router::build(AppState::new(TerrainImageController::new(repo)));

        Self { app, pool }
    }

    async fn seed(&self) -> TerrainImage {
        let image = TerrainImage::builder().build().unwrap();
        sqlx::query("INSERT INTO terrain_images (id, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(image.id.to_string())
            .bind(image.created_at.to_rfc3339())
            .bind(image.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .unwrap();
        image
    }

    async fn count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM terrain_images")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let h = Harness::new().await;
    let (status, body) = h.send(empty("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Collection actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_ok_for_index_even_with_stored_rows() {
    let h = Harness::new().await;
    h.seed().await;

    let (status, body) = h.send(empty("GET", "/terrain-images")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_return_empty_ok_for_create_form() {
    let h = Harness::new().await;
    let (status, body) = h.send(empty("GET", "/terrain-images/create")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_not_create_row_when_storing() {
    let h = Harness::new().await;

    let (status, body) = h
        .send(json(
            "POST",
            "/terrain-images",
            &serde_json::json!({ "label": "east slope", "zoom": 14 }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(h.count().await, 0);
}

#[tokio::test]
async fn should_accept_form_encoded_store() {
    let h = Harness::new().await;
    let req = Request::builder()
        .method("POST")
        .uri("/terrain-images")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("label=west+slope"))
        .unwrap();

    let (status, _) = h.send(req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.count().await, 0);
}

#[tokio::test]
async fn should_return_unsupported_media_type_for_plain_text_store() {
    let h = Harness::new().await;
    let req = Request::builder()
        .method("POST")
        .uri("/terrain-images")
        .header("content-type", "text/plain")
        .body(Body::from("hello"))
        .unwrap();

    let (status, _) = h.send(req).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ---------------------------------------------------------------------------
// Bound actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_ok_when_showing_stored_image() {
    let h = Harness::new().await;
    let image = h.seed().await;

    let (status, body) = h
        .send(empty("GET", &format!("/terrain-images/{}", image.id)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_return_empty_ok_for_edit_form() {
    let h = Harness::new().await;
    let image = h.seed().await;

    let (status, body) = h
        .send(empty("GET", &format!("/terrain-images/{}/edit", image.id)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_leave_row_unchanged_when_updating() {
    let h = Harness::new().await;
    let image = h.seed().await;
    let uri = format!("/terrain-images/{}", image.id);

    for method in ["PUT", "PATCH"] {
        let (status, _) = h
            .send(json(method, &uri, &serde_json::json!({ "label": "renamed" })))
            .await;
        assert_eq!(status, StatusCode::OK, "{method}");
    }

    let (updated_at,): (String,) =
        sqlx::query_as("SELECT updated_at FROM terrain_images WHERE id = ?")
            .bind(image.id.to_string())
            .fetch_one(&h.pool)
            .await
            .unwrap();
    assert_eq!(updated_at, image.updated_at.to_rfc3339());
}

#[tokio::test]
async fn should_keep_row_when_destroying() {
    let h = Harness::new().await;
    let image = h.seed().await;

    let (status, _) = h
        .send(empty("DELETE", &format!("/terrain-images/{}", image.id)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.count().await, 1);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_image() {
    let h = Harness::new().await;
    h.seed().await;
    let missing = terrain_domain::id::TerrainImageId::new();

    let (status, body) = h
        .send(empty("GET", &format!("/terrain-images/{missing}")))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body["error"],
        format!("TerrainImage {missing} not found").as_str()
    );
}

#[tokio::test]
async fn should_return_not_found_before_reading_body_on_update() {
    let h = Harness::new().await;
    let req = Request::builder()
        .method("PUT")
        .uri("/terrain-images/42")
        .header("content-type", "application/json")
        .body(Body::from("{broken"))
        .unwrap();

    let (status, _) = h.send(req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
