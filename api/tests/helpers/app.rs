use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use api::routes::routes;
use api::state::AppState;
use db::test_utils::setup_test_db;
use seeder::{CommentRange, FakeGenerator, SeedTargets};

pub const TEST_RNG_SEED: u64 = 7;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

/// Small targets so admin seeding stays fast in tests.
pub fn test_targets() -> SeedTargets {
    SeedTargets {
        countries: vec!["SE".into(), "NO".into()],
        categories: seeder::naming::default_categories(),
        cities: 5,
        users: 3,
        attractions: 10,
        comments: CommentRange::new(1, 3),
    }
}

/// Router over a fresh in-memory database, mounted under `/api` like the binary.
pub async fn make_test_app() -> TestApp {
    let db = setup_test_db().await;
    let app_state = AppState::new(db.clone(), test_targets(), FakeGenerator::seeded(TEST_RNG_SEED));
    let router = Router::new().nest("/api", routes(app_state));
    TestApp { router, db }
}

pub async fn send(app: &TestApp, method: Method, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn send_json(app: &TestApp, method: Method, uri: &str, body: Value) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
