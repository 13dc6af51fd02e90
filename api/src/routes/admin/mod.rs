//! Admin routes (`/api/admin`) over the synthetic dataset.
//!
//! - POST   `/api/admin/seed`    – top every table up to the configured targets
//! - GET    `/api/admin/options` – the normalized seed targets
//! - GET    `/api/admin/stats`   – row counts per table
//! - DELETE `/api/admin/wipe`    – delete every seeded row
//!
//! Seed and wipe share one lock so they never interleave.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

pub mod delete;
pub mod get;
pub mod post;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/seed", post(post::seed))
        .route("/options", get(get::options))
        .route("/stats", get(get::stats))
        .route("/wipe", delete(delete::wipe))
}
