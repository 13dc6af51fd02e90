use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use seeder::{SeedStats, SeedTargets};
use tracing::error;

use crate::response::ApiResponse;
use crate::state::AppState;

/// GET `/api/admin/options`
///
/// Returns the normalized seed targets used by `POST /api/admin/seed`.
/// Counts are already raised to their minimums and the fallback country codes
/// are included.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "countries": ["SE", "NO", "FI", "DK"],
///     "categories": ["Restaurant", "Cafe", "Architecture", "Museum", "Park", "Monument", "Viewpoint", "Beach", "Nature"],
///     "cities": 100,
///     "users": 50,
///     "attractions": 1000,
///     "comments": { "min": 0, "max": 20 }
///   },
///   "message": "Seed options"
/// }
/// ```
pub async fn options(State(app_state): State<AppState>) -> impl IntoResponse {
    let targets: SeedTargets = app_state.targets().clone();
    Json(ApiResponse::success(targets, "Seed options"))
}

/// GET `/api/admin/stats`
///
/// Current row count of every seeded table.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": { "countries": 4, "cities": 100, "categories": 9, "users": 50, "attractions": 1000, "comments": 10012 },
///   "message": "Row counts"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": { "countries": 0, ... }, "message": "Failed to count rows" }
/// ```
pub async fn stats(State(app_state): State<AppState>) -> impl IntoResponse {
    match SeedStats::collect(app_state.db()).await {
        Ok(stats) => ApiResponse::success(stats, "Row counts").with_status(StatusCode::OK),
        Err(e) => {
            error!(error = %e, "failed to count rows");
            ApiResponse::<SeedStats>::error("Failed to count rows")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
