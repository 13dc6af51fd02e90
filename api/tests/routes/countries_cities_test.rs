use axum::http::{Method, StatusCode};
use db::models::{city, country};

use crate::helpers::{json_body, make_test_app, send};

#[tokio::test]
async fn countries_carry_city_counts() {
    let app = make_test_app().await;
    let fi = country::Model::create(&app.db, "FI", "Finland").await.unwrap();
    let dk = country::Model::create(&app.db, "DK", "Denmark").await.unwrap();
    city::Model::create(&app.db, "Turku", fi.id).await.unwrap();

    let response = send(&app, Method::GET, "/api/countries").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!([
            { "id": dk.id, "code": "DK", "name": "Denmark", "cities": 0 },
            { "id": fi.id, "code": "FI", "name": "Finland", "cities": 1 }
        ])
    );
}

#[tokio::test]
async fn cities_filter_by_country_code() {
    let app = make_test_app().await;
    let se = country::Model::create(&app.db, "SE", "Sweden").await.unwrap();
    let dk = country::Model::create(&app.db, "DK", "Denmark").await.unwrap();
    city::Model::create(&app.db, "Visby", se.id).await.unwrap();
    city::Model::create(&app.db, "Odense", dk.id).await.unwrap();

    let all = json_body(send(&app, Method::GET, "/api/cities").await).await;
    let rows: Vec<(&str, &str)> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap(), c["country"].as_str().unwrap()))
        .collect();
    assert_eq!(rows, [("Odense", "DK"), ("Visby", "SE")]);

    let danish = json_body(send(&app, Method::GET, "/api/cities?country=dk").await).await;
    assert_eq!(danish["data"].as_array().unwrap().len(), 1);
    assert_eq!(danish["data"][0]["name"], "Odense");
}
