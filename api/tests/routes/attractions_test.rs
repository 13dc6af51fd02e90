use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use db::models::{attraction, category, city, comment, country, user_account};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde_json::json;

use crate::helpers::{json_body, make_test_app, send, send_json};

async fn seed_park(db: &DatabaseConnection) -> (attraction::Model, user_account::Model) {
    let no = country::Model::create(db, "NO", "Norway").await.unwrap();
    let bergen = city::Model::create(db, "Bergen", no.id).await.unwrap();
    let cat = category::Model::create(db, "Harbor").await.unwrap();
    let harbor = attraction::ActiveModel {
        title: Set("Old Harbor, Bergen".into()),
        description: Set("Boats.".into()),
        address_line: Set("Bryggen 1".into()),
        postal_code: Set("5003".into()),
        latitude: Set(60.39),
        longitude: Set(5.32),
        is_recommended: Set(true),
        category_id: Set(cat.id),
        city_id: Set(bergen.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    let ada = user_account::Model::create(db, "Ada Lovelace", "ada@example.com")
        .await
        .unwrap();
    (harbor, ada)
}

#[tokio::test]
async fn comments_of_missing_attraction_is_404() {
    let app = make_test_app().await;

    let response = send(&app, Method::GET, "/api/attractions/999/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Attraction not found.");
}

#[tokio::test]
async fn comments_are_newest_first_and_paged() {
    let app = make_test_app().await;
    let (harbor, ada) = seed_park(&app.db).await;
    let now = Utc::now();
    for (text, days) in [("old", 30), ("newest", 1), ("middle", 10)] {
        comment::Model::create(&app.db, harbor.id, ada.id, text, now - Duration::days(days))
            .await
            .unwrap();
    }

    let uri = format!("/api/attractions/{}/comments?page=1&per_page=2", harbor.id);
    let response = send(&app, Method::GET, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    let data = &json["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["page"], 1);
    assert_eq!(data["per_page"], 2);
    let texts: Vec<&str> = data["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["newest", "middle"]);

    let first = &data["comments"][0];
    assert_eq!(first["user"]["display_name"], "Ada Lovelace");
    assert_eq!(first["attraction"]["title"], "Old Harbor, Bergen");
    assert_eq!(first["attraction"]["city"], "Bergen");
    assert_eq!(first["attraction"]["country"], "NO");

    let uri = format!("/api/attractions/{}/comments?page=2&per_page=2", harbor.id);
    let second = json_body(send(&app, Method::GET, &uri).await).await;
    assert_eq!(second["data"]["comments"][0]["text"], "old");
}

#[tokio::test]
async fn page_size_is_clamped() {
    let app = make_test_app().await;
    let (harbor, _) = seed_park(&app.db).await;

    let uri = format!("/api/attractions/{}/comments?page=0&per_page=5000", harbor.id);
    let json = json_body(send(&app, Method::GET, &uri).await).await;
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["per_page"], 200);
    assert_eq!(json["data"]["total"], 0);
}

#[tokio::test]
async fn add_comment_trims_and_returns_201() {
    let app = make_test_app().await;
    let (harbor, ada) = seed_park(&app.db).await;
    let before = Utc::now();

    let uri = format!("/api/attractions/{}/comments", harbor.id);
    let body = json!({ "user_id": ada.id, "text": "  Worth the climb.  " });
    let response = send_json(&app, Method::POST, &uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["data"]["text"], "Worth the climb.");
    assert_eq!(json["data"]["user"]["id"], ada.id);
    assert_eq!(json["data"]["attraction"]["id"], harbor.id);

    let stored = comment::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "Worth the climb.");
    assert!(stored[0].created_at >= before - Duration::seconds(1));
}

#[tokio::test]
async fn add_comment_accepts_camel_case_user_id() {
    let app = make_test_app().await;
    let (harbor, ada) = seed_park(&app.db).await;

    let uri = format!("/api/attractions/{}/comments", harbor.id);
    let body = json!({ "userId": ada.id, "text": "Windy." });
    let response = send_json(&app, Method::POST, &uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn add_comment_to_missing_attraction_is_404() {
    let app = make_test_app().await;
    let (_, ada) = seed_park(&app.db).await;

    let body = json!({ "user_id": ada.id, "text": "Hello." });
    let response = send_json(&app, Method::POST, "/api/attractions/999/comments", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "Attraction not found.");
}

#[tokio::test]
async fn add_comment_with_unknown_user_is_400() {
    let app = make_test_app().await;
    let (harbor, _) = seed_park(&app.db).await;
    let uri = format!("/api/attractions/{}/comments", harbor.id);

    let response = send_json(&app, Method::POST, &uri, json!({ "user_id": 999, "text": "Hi." })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "UserId not found.");

    let response = send_json(&app, Method::POST, &uri, json!({ "text": "Hi." })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "UserId not found.");
}

#[tokio::test]
async fn add_comment_with_blank_text_is_400() {
    let app = make_test_app().await;
    let (harbor, ada) = seed_park(&app.db).await;
    let uri = format!("/api/attractions/{}/comments", harbor.id);

    for body in [json!({ "user_id": ada.id, "text": "   " }), json!({ "user_id": ada.id })] {
        let response = send_json(&app, Method::POST, &uri, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "Text is required.");
    }
    assert_eq!(comment::Entity::find().all(&app.db).await.unwrap().len(), 0);
}
