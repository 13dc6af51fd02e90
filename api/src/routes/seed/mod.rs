use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use seeder::ContentGenerator;
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/smoke", get(smoke))
}

#[derive(Debug, Serialize)]
pub struct SmokeResponse {
    pub n1: i64,
    pub n2: i64,
}

/// GET `/api/seed/smoke`
///
/// Two numbers straight from the content generator: `n1` in `[1, 10)` and
/// `n2` in `[1000, 9999)`. Every call advances the shared generator.
///
/// ## 200 OK
/// ```json
/// { "success": true, "data": { "n1": 4, "n2": 7311 }, "message": "Generator OK" }
/// ```
pub async fn smoke(State(app_state): State<AppState>) -> impl IntoResponse {
    let mut generator = app_state.generator().lock().await;
    let data = SmokeResponse {
        n1: generator.next_int(1, 10),
        n2: generator.next_int(1000, 9999),
    };
    Json(ApiResponse::success(data, "Generator OK"))
}
