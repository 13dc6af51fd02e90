use axum::http::{Method, StatusCode};

use crate::helpers::{json_body, make_test_app, send};

#[tokio::test]
async fn seed_populates_every_table() {
    let app = make_test_app().await;

    let response = send(&app, Method::POST, "/api/admin/seed").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Seeded test data.");
    assert_eq!(json["data"]["attractions"], 10);

    let stats = json_body(send(&app, Method::GET, "/api/admin/stats").await).await;
    let d = &stats["data"];
    assert_eq!(d["countries"], 2);
    assert_eq!(d["categories"], 9);
    assert_eq!(d["cities"], 5);
    assert_eq!(d["users"], 3);
    assert_eq!(d["attractions"], 10);
    let comments = d["comments"].as_u64().unwrap();
    assert!((10..=30).contains(&comments), "{comments}");
}

#[tokio::test]
async fn seeding_twice_creates_nothing_new() {
    let app = make_test_app().await;
    send(&app, Method::POST, "/api/admin/seed").await;
    let first = json_body(send(&app, Method::GET, "/api/admin/stats").await).await;

    let again = json_body(send(&app, Method::POST, "/api/admin/seed").await).await;
    assert_eq!(again["data"]["comments"], 0);
    assert_eq!(again["data"]["cities"], 0);

    let second = json_body(send(&app, Method::GET, "/api/admin/stats").await).await;
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn wipe_deletes_everything() {
    let app = make_test_app().await;
    send(&app, Method::POST, "/api/admin/seed").await;

    let response = send(&app, Method::DELETE, "/api/admin/wipe").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["message"], "All test data deleted.");
    assert!(json["data"].as_u64().unwrap() > 0);

    let stats = json_body(send(&app, Method::GET, "/api/admin/stats").await).await;
    for table in ["countries", "categories", "cities", "users", "attractions", "comments"] {
        assert_eq!(stats["data"][table], 0, "{table}");
    }

    let again = json_body(send(&app, Method::DELETE, "/api/admin/wipe").await).await;
    assert_eq!(again["data"], 0);
}

#[tokio::test]
async fn options_expose_the_targets() {
    let app = make_test_app().await;
    let json = json_body(send(&app, Method::GET, "/api/admin/options").await).await;

    let d = &json["data"];
    assert_eq!(d["countries"], serde_json::json!(["SE", "NO"]));
    assert_eq!(d["cities"], 5);
    assert_eq!(d["comments"]["min"], 1);
    assert_eq!(d["comments"]["max"], 3);
    assert_eq!(d["categories"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn seed_requires_post() {
    let app = make_test_app().await;
    let response = send(&app, Method::GET, "/api/admin/seed").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
