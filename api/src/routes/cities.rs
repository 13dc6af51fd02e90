use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use db::models::city;
use serde::Serialize;
use tracing::error;

use crate::response::ApiResponse;
use crate::routes::lookup::CitiesQuery;
use crate::state::AppState;

pub fn city_routes() -> Router<AppState> {
    Router::new().route("/", get(list_cities))
}

#[derive(Debug, Serialize)]
pub struct CityItem {
    pub id: i64,
    pub name: String,
    /// Country code.
    pub country: String,
}

/// GET `/api/cities?country=SE`
///
/// Cities ordered by country code, then name. `country` is optional; when
/// present it is matched against the code regardless of case.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 31, "name": "Göteborg", "country": "SE" },
///     { "id": 12, "name": "Uppsala", "country": "SE" }
///   ],
///   "message": "Cities retrieved"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": [], "message": "Failed to retrieve cities" }
/// ```
async fn list_cities(
    State(app_state): State<AppState>,
    Query(params): Query<CitiesQuery>,
) -> impl IntoResponse {
    match city::Model::list_with_country(app_state.db(), params.country.as_deref()).await {
        Ok(rows) => {
            let data: Vec<CityItem> = rows
                .into_iter()
                .map(|(city, country)| CityItem {
                    id: city.id,
                    name: city.name,
                    country: country.code,
                })
                .collect();
            ApiResponse::success(data, "Cities retrieved").with_status(StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "failed to list cities");
            ApiResponse::<Vec<CityItem>>::error("Failed to retrieve cities")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
