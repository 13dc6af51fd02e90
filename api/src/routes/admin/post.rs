use axum::{extract::State, http::StatusCode, response::IntoResponse};
use seeder::{DataSeeder, SeedReport};
use tracing::error;

use crate::response::ApiResponse;
use crate::state::AppState;

/// POST `/api/admin/seed`
///
/// Runs an incremental seed with the targets the server was started with.
/// Only missing rows are created, so repeating the call is harmless. Content
/// is drawn from the shared generator, so two calls never replay the same
/// sequence even when `SEED_RNG_SEED` is set.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": { "countries": 0, "categories": 0, "cities": 0, "users": 0, "attractions": 0, "comments": 0 },
///   "message": "Seeded test data."
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": { ... }, "message": "Seeding failed" }
/// ```
pub async fn seed(State(app_state): State<AppState>) -> impl IntoResponse {
    let _guard = app_state.admin_lock().lock().await;
    let mut generator = app_state.generator().lock().await;

    let mut seeder = DataSeeder::new(app_state.db(), &mut *generator);
    match seeder.seed(app_state.targets()).await {
        Ok(report) => ApiResponse::success(report, "Seeded test data.").with_status(StatusCode::OK),
        Err(e) => {
            error!(error = %e, "admin seed failed");
            ApiResponse::<SeedReport>::error("Seeding failed")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
