use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use db::models::{attraction, category, city, comment, country, user_account};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};

use crate::helpers::{json_body, make_test_app, send};

#[tokio::test]
async fn users_are_listed_with_their_comments_newest_first() {
    let app = make_test_app().await;
    let db = &app.db;
    let se = country::Model::create(db, "SE", "Sweden").await.unwrap();
    let town = city::Model::create(db, "Uppsala", se.id).await.unwrap();
    let cat = category::Model::create(db, "Park").await.unwrap();
    let park = attraction::ActiveModel {
        title: Set("Stadsparken".into()),
        description: Set("Green.".into()),
        address_line: Set("Street 1".into()),
        postal_code: Set("75310".into()),
        latitude: Set(59.85),
        longitude: Set(17.63),
        is_recommended: Set(false),
        category_id: Set(cat.id),
        city_id: Set(town.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    let bob = user_account::Model::create(db, "Bob Berg", "bob@example.com").await.unwrap();
    user_account::Model::create(db, "Ada Lovelace", "ada@example.com").await.unwrap();
    let now = Utc::now();
    comment::Model::create(db, park.id, bob.id, "Earlier.", now - Duration::days(2))
        .await
        .unwrap();
    comment::Model::create(db, park.id, bob.id, "Later.", now).await.unwrap();

    let response = send(&app, Method::GET, "/api/users/comments").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let data = &json["data"];
    assert_eq!(data["total"], 2);
    assert_eq!(data["users"][0]["display_name"], "Ada Lovelace");
    assert_eq!(data["users"][0]["comments"], serde_json::json!([]));
    assert_eq!(data["users"][1]["display_name"], "Bob Berg");
    assert_eq!(data["users"][1]["comments"][0]["text"], "Later.");
    assert_eq!(data["users"][1]["comments"][0]["attraction"], "Stadsparken");
    assert_eq!(data["users"][1]["comments"][1]["text"], "Earlier.");

    let only = json_body(send(&app, Method::GET, "/api/users/comments?onlyWithComments=true").await).await;
    assert_eq!(only["data"]["total"], 1);
    assert_eq!(only["data"]["users"][0]["email"], "bob@example.com");
}

#[tokio::test]
async fn users_page_is_clamped() {
    let app = make_test_app().await;
    for i in 0..3 {
        let email = format!("user{i}@example.com");
        user_account::Model::create(&app.db, &format!("User {i}"), &email)
            .await
            .unwrap();
    }

    let json = json_body(send(&app, Method::GET, "/api/users/comments?page=2&per_page=2").await).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["page"], 2);
    assert_eq!(json["data"]["users"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["users"][0]["display_name"], "User 2");
}
