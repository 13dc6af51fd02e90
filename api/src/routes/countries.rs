use axum::{
    Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use db::models::country;
use serde::Serialize;
use tracing::error;

use crate::response::ApiResponse;
use crate::state::AppState;

pub fn country_routes() -> Router<AppState> {
    Router::new().route("/", get(list_countries))
}

#[derive(Debug, Serialize)]
pub struct CountryItem {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Number of cities in the country.
    pub cities: u64,
}

/// GET `/api/countries`
///
/// Every country ordered by code, with how many cities it has.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 4, "code": "DK", "name": "Denmark", "cities": 25 },
///     { "id": 1, "code": "SE", "name": "Sweden", "cities": 25 }
///   ],
///   "message": "Countries retrieved"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": [], "message": "Failed to retrieve countries" }
/// ```
async fn list_countries(State(app_state): State<AppState>) -> impl IntoResponse {
    match country::Model::all_with_city_counts(app_state.db()).await {
        Ok(rows) => {
            let data: Vec<CountryItem> = rows
                .into_iter()
                .map(|(country, cities)| CountryItem {
                    id: country.id,
                    code: country.code,
                    name: country.name,
                    cities,
                })
                .collect();
            ApiResponse::success(data, "Countries retrieved").with_status(StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "failed to list countries");
            ApiResponse::<Vec<CountryItem>>::error("Failed to retrieve countries")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
