use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{attraction, comment};
use tracing::error;

use super::common::{AttractionMini, CommentItem, CommentPage, PageQuery, UserMini};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET `/api/attractions/{id}/comments`
///
/// Comments on one attraction, newest first.
///
/// **Query**:
/// - `page` *(default 1)*
/// - `per_page` *(default 50, max 200)*
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "comments": [
///       {
///         "id": 812,
///         "text": "Worth the climb.",
///         "created_at": "2026-03-14T09:26:53Z",
///         "user": { "id": 17, "display_name": "Ada Lovelace" },
///         "attraction": { "id": 40, "title": "Old Harbor, Bergen", "city_id": 9, "city": "Bergen", "country": "NO" }
///       }
///     ],
///     "page": 1,
///     "per_page": 50,
///     "total": 1
///   },
///   "message": "Comments retrieved"
/// }
/// ```
///
/// ## 404 Not Found
/// ```json
/// { "success": false, "data": { ... }, "message": "Attraction not found." }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": { ... }, "message": "Failed to retrieve comments" }
/// ```
pub async fn comments(
    State(app_state): State<AppState>,
    Path(attraction_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let db = app_state.db();
    let (page, per_page) = query.resolve();

    let location = match attraction::Model::find_with_location(db, attraction_id).await {
        Ok(Some(found)) => AttractionMini::from(found),
        Ok(None) => {
            return ApiResponse::<CommentPage>::error("Attraction not found.")
                .with_status(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            error!(error = %e, attraction_id, "failed to load attraction");
            return ApiResponse::<CommentPage>::error("Failed to retrieve comments")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match comment::Model::page_for_attraction(db, attraction_id, page, per_page).await {
        Ok((total, rows)) => {
            let comments = rows
                .into_iter()
                .map(|(comment, user)| {
                    let user = user.map(UserMini::from).unwrap_or_default();
                    CommentItem::new(comment, user, location.clone())
                })
                .collect();
            let data = CommentPage {
                comments,
                page,
                per_page,
                total,
            };
            ApiResponse::success(data, "Comments retrieved").with_status(StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, attraction_id, "failed to list comments");
            ApiResponse::<CommentPage>::error("Failed to retrieve comments")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
