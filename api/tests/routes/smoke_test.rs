use axum::http::{Method, StatusCode};

use seeder::{ContentGenerator, FakeGenerator};

use crate::helpers::{TEST_RNG_SEED, json_body, make_test_app, send};

#[tokio::test]
async fn smoke_numbers_are_in_range() {
    let app = make_test_app().await;

    let response = send(&app, Method::GET, "/api/seed/smoke").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let n1 = json["data"]["n1"].as_i64().unwrap();
    let n2 = json["data"]["n2"].as_i64().unwrap();
    assert!((1..10).contains(&n1));
    assert!((1000..9999).contains(&n2));
}

#[tokio::test]
async fn successive_calls_continue_one_sequence() {
    let app = make_test_app().await;
    let mut expected = FakeGenerator::seeded(TEST_RNG_SEED);

    for _ in 0..3 {
        let json = json_body(send(&app, Method::GET, "/api/seed/smoke").await).await;
        assert_eq!(json["data"]["n1"].as_i64().unwrap(), expected.next_int(1, 10));
        assert_eq!(json["data"]["n2"].as_i64().unwrap(), expected.next_int(1000, 9999));
    }
}
