use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{city, country};
use tracing::error;

use super::common::{CitiesQuery, CityLookup, CountryLookup};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET `/api/lookup/countries`
///
/// Every country with the number of cities it has, ordered by code.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [{ "id": 3, "code": "DK", "name": "Denmark", "city_count": 6 }],
///   "message": "Countries retrieved"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": [], "message": "Failed to retrieve countries" }
/// ```
pub async fn countries(State(app_state): State<AppState>) -> impl IntoResponse {
    match country::Model::all_with_city_counts(app_state.db()).await {
        Ok(rows) => {
            let data: Vec<CountryLookup> = rows.into_iter().map(CountryLookup::from).collect();
            ApiResponse::success(data, "Countries retrieved").with_status(StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "failed to list countries");
            ApiResponse::<Vec<CountryLookup>>::error("Failed to retrieve countries")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET `/api/lookup/cities?country=SE`
///
/// Cities with their country, ordered by country code then city name.
///
/// **Query**:
/// - `country` *(optional)*: country code, trimmed and matched regardless of
///   case. Blank means every country.
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 12, "name": "Uppsala", "country_code": "SE", "country_name": "Sweden" }
///   ],
///   "message": "Cities retrieved"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": [], "message": "Failed to retrieve cities" }
/// ```
pub async fn cities(
    State(app_state): State<AppState>,
    Query(params): Query<CitiesQuery>,
) -> impl IntoResponse {
    match city::Model::list_with_country(app_state.db(), params.country.as_deref()).await {
        Ok(rows) => {
            let data: Vec<CityLookup> = rows.into_iter().map(CityLookup::from).collect();
            ApiResponse::success(data, "Cities retrieved").with_status(StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "failed to list cities");
            ApiResponse::<Vec<CityLookup>>::error("Failed to retrieve cities")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
