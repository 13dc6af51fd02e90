use chrono::{DateTime, Utc};
use db::models::{comment, user_account};
use serde::{Deserialize, Serialize};

use crate::routes::attractions::common::PageQuery;

#[derive(Debug, Default, Deserialize)]
pub struct UserCommentsQuery {
    /// Leave out users who never commented.
    #[serde(default, alias = "onlyWithComments")]
    pub only_with_comments: bool,
    pub page: Option<i64>,
    #[serde(alias = "pageSize")]
    pub per_page: Option<i64>,
}

impl UserCommentsQuery {
    pub fn paging(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserComment {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Title of the commented attraction.
    pub attraction: String,
}

impl From<(comment::Model, String)> for UserComment {
    fn from((comment, attraction): (comment::Model, String)) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            created_at: comment.created_at,
            attraction,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserWithComments {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub comments: Vec<UserComment>,
}

impl UserWithComments {
    pub fn new(user: user_account::Model, comments: Vec<UserComment>) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            comments,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UserCommentsPage {
    pub users: Vec<UserWithComments>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
