use axum::http::{Method, StatusCode};

use crate::helpers::{json_body, make_test_app, send};

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app().await;

    let response = send(&app, Method::GET, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = make_test_app().await;
    let response = send(&app, Method::GET, "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
