use chrono::{DateTime, Utc};
use db::models::{attraction, city, comment, country, user_account};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: i64 = 50;
pub const MAX_PER_PAGE: i64 = 200;

/// `?page=&per_page=` with the usual clamping applied by [`PageQuery::resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page index (default 1).
    pub page: Option<i64>,
    /// Items per page (default 50, max 200).
    #[serde(alias = "pageSize")]
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// `(page, per_page)` with `page >= 1` and `per_page` in `[1, 200]`.
    pub fn resolve(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        (page as u64, per_page as u64)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UserMini {
    pub id: i64,
    pub display_name: String,
}

impl From<user_account::Model> for UserMini {
    fn from(user: user_account::Model) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
        }
    }
}

/// The attraction a comment belongs to, with its city and country code.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AttractionMini {
    pub id: i64,
    pub title: String,
    pub city_id: i64,
    pub city: String,
    pub country: String,
}

impl From<(attraction::Model, city::Model, country::Model)> for AttractionMini {
    fn from((attraction, city, country): (attraction::Model, city::Model, country::Model)) -> Self {
        Self {
            id: attraction.id,
            title: attraction.title,
            city_id: city.id,
            city: city.name,
            country: country.code,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CommentItem {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user: UserMini,
    pub attraction: AttractionMini,
}

impl CommentItem {
    pub fn new(comment: comment::Model, user: UserMini, attraction: AttractionMini) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            created_at: comment.created_at,
            user,
            attraction,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CommentPage {
    pub comments: Vec<CommentItem>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Body of `POST /api/attractions/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct AddCommentReq {
    #[serde(alias = "userId")]
    pub user_id: Option<i64>,
    pub text: Option<String>,
}
