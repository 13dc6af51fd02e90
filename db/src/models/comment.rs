use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub attraction_id: i64,
    pub user_account_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attraction::Entity",
        from = "Column::AttractionId",
        to = "super::attraction::Column::Id",
        on_delete = "Restrict"
    )]
    Attraction,

    #[sea_orm(
        belongs_to = "super::user_account::Entity",
        from = "Column::UserAccountId",
        to = "super::user_account::Column::Id",
        on_delete = "Restrict"
    )]
    UserAccount,
}

impl Related<super::attraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attraction.def()
    }
}

impl Related<super::user_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        attraction_id: i64,
        user_account_id: i64,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            text: Set(text.to_owned()),
            created_at: Set(created_at),
            attraction_id: Set(attraction_id),
            user_account_id: Set(user_account_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// One page of an attraction's comments, newest first, with their authors.
    ///
    /// `page` is 1-based. Returns the total number of comments on the
    /// attraction alongside the page.
    pub async fn page_for_attraction(
        db: &DbConn,
        attraction_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<(u64, Vec<(Model, Option<super::user_account::Model>)>), DbErr> {
        let paginator = Entity::find()
            .filter(Column::AttractionId.eq(attraction_id))
            .find_also_related(super::user_account::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(db, per_page.max(1));

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((total, rows))
    }

    /// Comments written by any of `user_ids`, newest first, each with the
    /// title of the attraction it belongs to.
    pub async fn for_users(db: &DbConn, user_ids: &[i64]) -> Result<Vec<(Model, String)>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Entity::find()
            .filter(Column::UserAccountId.is_in(user_ids.iter().copied()))
            .find_also_related(super::attraction::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, attraction)| {
                let title = attraction.map(|a| a.title).unwrap_or_default();
                (comment, title)
            })
            .collect())
    }
}
