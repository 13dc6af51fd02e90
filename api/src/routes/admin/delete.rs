use axum::{extract::State, http::StatusCode, response::IntoResponse};
use seeder::reset;
use tracing::error;

use crate::response::ApiResponse;
use crate::state::AppState;

/// DELETE `/api/admin/wipe`
///
/// Deletes every row from the six seeded tables, dependents first.
/// `data` is the number of rows removed.
pub async fn wipe(State(app_state): State<AppState>) -> impl IntoResponse {
    let _guard = app_state.admin_lock().lock().await;

    match reset::clear(app_state.db()).await {
        Ok(removed) => ApiResponse::success(removed, "All test data deleted.").with_status(StatusCode::OK),
        Err(e) => {
            error!(error = %e, "admin wipe failed");
            ApiResponse::<u64>::error("Failed to delete test data")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
