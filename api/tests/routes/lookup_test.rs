use axum::http::{Method, StatusCode};
use db::models::{city, country};

use crate::helpers::{json_body, make_test_app, send};

#[tokio::test]
async fn countries_are_ordered_by_code_with_city_counts() {
    let app = make_test_app().await;
    let se = country::Model::create(&app.db, "SE", "Sweden").await.unwrap();
    country::Model::create(&app.db, "DK", "Denmark").await.unwrap();
    city::Model::create(&app.db, "Lund", se.id).await.unwrap();
    city::Model::create(&app.db, "Umeå", se.id).await.unwrap();

    let response = send(&app, Method::GET, "/api/lookup/countries").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["code"], "DK");
    assert_eq!(data[0]["city_count"], 0);
    assert_eq!(data[1]["code"], "SE");
    assert_eq!(data[1]["city_count"], 2);
}

#[tokio::test]
async fn cities_can_be_filtered_by_country() {
    let app = make_test_app().await;
    let se = country::Model::create(&app.db, "SE", "Sweden").await.unwrap();
    let no = country::Model::create(&app.db, "NO", "Norway").await.unwrap();
    city::Model::create(&app.db, "Uppsala", se.id).await.unwrap();
    city::Model::create(&app.db, "Lund", se.id).await.unwrap();
    city::Model::create(&app.db, "Oslo", no.id).await.unwrap();

    let all = json_body(send(&app, Method::GET, "/api/lookup/cities").await).await;
    let names: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Oslo", "Lund", "Uppsala"]);

    let swedish = json_body(send(&app, Method::GET, "/api/lookup/cities?country=%20se").await).await;
    let data = swedish["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|c| c["country_code"] == "SE" && c["country_name"] == "Sweden"));
}
