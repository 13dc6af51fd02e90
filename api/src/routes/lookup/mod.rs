//! Lookup routes (`/api/lookup`).
//!
//! - GET `/api/lookup/countries`          – countries with their city counts
//! - GET `/api/lookup/cities?country=SE`  – cities, optionally for one country

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod common;
pub mod get;

pub use common::{CitiesQuery, CityLookup, CountryLookup};

pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(get::countries))
        .route("/cities", get(get::cities))
}
