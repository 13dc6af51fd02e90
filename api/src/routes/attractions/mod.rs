//! Attraction routes (`/api/attractions`).
//!
//! - GET  `/api/attractions/{id}/comments`  – paged comments, newest first
//! - POST `/api/attractions/{id}/comments`  – add a comment

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn attraction_routes() -> Router<AppState> {
    Router::new().route("/{id}/comments", get(get::comments).post(post::add_comment))
}
