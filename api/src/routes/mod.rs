//! HTTP routes under `/api`.
//!
//! - `/health` → liveness check
//! - `/admin` → seed, inspect and wipe the synthetic dataset
//! - `/lookup` → countries and cities for dropdowns and filters
//! - `/seed` → generator smoke check
//! - `/countries`, `/cities` → plain country and city listings
//! - `/attractions` → comments on an attraction
//! - `/users` → users with the comments they wrote

use axum::Router;

use crate::routes::{
    admin::admin_routes, attractions::attraction_routes, cities::city_routes,
    countries::country_routes, health::health_routes, lookup::lookup_routes, seed::seed_routes,
    users::user_routes,
};
use crate::state::AppState;

pub mod admin;
pub mod attractions;
pub mod cities;
pub mod countries;
pub mod health;
pub mod lookup;
pub mod seed;
pub mod users;

/// Builds the `/api` router with its state applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/admin", admin_routes())
        .nest("/lookup", lookup_routes())
        .nest("/seed", seed_routes())
        .nest("/countries", country_routes())
        .nest("/cities", city_routes())
        .nest("/attractions", attraction_routes())
        .nest("/users", user_routes())
        .with_state(app_state)
}
