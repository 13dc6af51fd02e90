//! User routes (`/api/users`).
//!
//! - GET `/api/users/comments?only_with_comments=true`  – users with their comments

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod common;
pub mod get;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/comments", get(get::comments))
}
