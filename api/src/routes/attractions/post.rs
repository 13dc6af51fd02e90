use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::{attraction, comment, user_account};
use sea_orm::EntityTrait;
use tracing::{error, info};

use super::common::{AddCommentReq, AttractionMini, CommentItem, UserMini};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST `/api/attractions/{id}/comments`
///
/// Adds a comment to an attraction. The text is trimmed and stamped with the
/// current time.
///
/// ### Request Body
/// ```json
/// { "user_id": 17, "text": "  Worth the climb.  " }
/// ```
///
/// ## 201 Created
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 813,
///     "text": "Worth the climb.",
///     "created_at": "2026-10-18T08:00:00Z",
///     "user": { "id": 17, "display_name": "Ada Lovelace" },
///     "attraction": { "id": 40, "title": "Old Harbor, Bergen", "city_id": 9, "city": "Bergen", "country": "NO" }
///   },
///   "message": "Comment added"
/// }
/// ```
///
/// ## 404 Not Found
/// ```json
/// { "success": false, "data": { ... }, "message": "Attraction not found." }
/// ```
///
/// ## 400 Bad Request
/// Unknown `user_id`, or `text` missing or blank:
/// ```json
/// { "success": false, "data": { ... }, "message": "UserId not found." }
/// { "success": false, "data": { ... }, "message": "Text is required." }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": { ... }, "message": "Failed to add comment" }
/// ```
pub async fn add_comment(
    State(app_state): State<AppState>,
    Path(attraction_id): Path<i64>,
    Json(req): Json<AddCommentReq>,
) -> impl IntoResponse {
    let db = app_state.db();

    let location = match attraction::Model::find_with_location(db, attraction_id).await {
        Ok(Some(found)) => AttractionMini::from(found),
        Ok(None) => {
            return ApiResponse::<CommentItem>::error("Attraction not found.")
                .with_status(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            error!(error = %e, attraction_id, "failed to load attraction");
            return ApiResponse::<CommentItem>::error("Failed to add comment")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let user = match req.user_id {
        Some(user_id) => match user_account::Entity::find_by_id(user_id).one(db).await {
            Ok(user) => user,
            Err(e) => {
                error!(error = %e, user_id, "failed to load user");
                return ApiResponse::<CommentItem>::error("Failed to add comment")
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR);
            }
        },
        None => None,
    };
    let Some(user) = user else {
        return ApiResponse::<CommentItem>::error("UserId not found.")
            .with_status(StatusCode::BAD_REQUEST);
    };

    let text = req.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return ApiResponse::<CommentItem>::error("Text is required.")
            .with_status(StatusCode::BAD_REQUEST);
    }

    match comment::Model::create(db, attraction_id, user.id, text, Utc::now()).await {
        Ok(created) => {
            info!(comment_id = created.id, attraction_id, user_id = user.id, "comment added");
            let data = CommentItem::new(created, UserMini::from(user), location);
            ApiResponse::success(data, "Comment added").with_status(StatusCode::CREATED)
        }
        Err(e) => {
            error!(error = %e, attraction_id, "failed to add comment");
            ApiResponse::<CommentItem>::error("Failed to add comment")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
