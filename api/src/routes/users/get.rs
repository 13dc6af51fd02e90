use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{comment, user_account};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::error;

use super::common::{UserComment, UserCommentsPage, UserCommentsQuery, UserWithComments};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET `/api/users/comments`
///
/// Users ordered by display name, each with every comment they wrote, newest
/// first.
///
/// **Query**:
/// - `only_with_comments` *(default false)*: skip users without comments
/// - `page` *(default 1)*
/// - `per_page` *(default 50, max 200)*
///
/// ## 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "users": [
///       {
///         "id": 17,
///         "display_name": "Ada Lovelace",
///         "email": "ada.lovelace@example.com",
///         "comments": [
///           { "id": 812, "text": "Worth the climb.", "created_at": "2026-03-14T09:26:53Z", "attraction": "Old Harbor, Bergen" }
///         ]
///       }
///     ],
///     "page": 1,
///     "per_page": 50,
///     "total": 1
///   },
///   "message": "Users retrieved"
/// }
/// ```
///
/// ## 500 Internal Server Error
/// ```json
/// { "success": false, "data": { ... }, "message": "Failed to retrieve users" }
/// ```
pub async fn comments(
    State(app_state): State<AppState>,
    Query(query): Query<UserCommentsQuery>,
) -> impl IntoResponse {
    match load_page(app_state.db(), &query).await {
        Ok(data) => ApiResponse::success(data, "Users retrieved").with_status(StatusCode::OK),
        Err(e) => {
            error!(error = %e, "failed to list users with comments");
            ApiResponse::<UserCommentsPage>::error("Failed to retrieve users")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn load_page(
    db: &DatabaseConnection,
    query: &UserCommentsQuery,
) -> Result<UserCommentsPage, DbErr> {
    let (page, per_page) = query.paging().resolve();
    let (total, users) =
        user_account::Model::page(db, query.only_with_comments, page, per_page).await?;

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    let mut by_user: HashMap<i64, Vec<UserComment>> = HashMap::new();
    for row in comment::Model::for_users(db, &ids).await? {
        by_user
            .entry(row.0.user_account_id)
            .or_default()
            .push(UserComment::from(row));
    }

    let users = users
        .into_iter()
        .map(|user| {
            let comments = by_user.remove(&user.id).unwrap_or_default();
            UserWithComments::new(user, comments)
        })
        .collect();

    Ok(UserCommentsPage {
        users,
        page,
        per_page,
        total,
    })
}
