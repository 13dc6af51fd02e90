use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use sea_orm::sea_query::Query;
use serde::{Deserialize, Serialize};

/// A registered user who can author comments.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub display_name: String,
    /// Unique regardless of case.
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, display_name: &str, email: &str) -> Result<Model, DbErr> {
        ActiveModel {
            display_name: Set(display_name.to_owned()),
            email: Set(email.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// One page of users ordered by display name, plus the total matching.
    ///
    /// With `only_with_comments` set, users who never commented are left out.
    pub async fn page(
        db: &DbConn,
        only_with_comments: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(u64, Vec<Model>), DbErr> {
        let mut query = Entity::find();
        if only_with_comments {
            query = query.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(super::comment::Column::UserAccountId)
                        .from(super::comment::Entity)
                        .to_owned(),
                ),
            );
        }

        let paginator = query
            .order_by_asc(Column::DisplayName)
            .order_by_asc(Column::Id)
            .paginate(db, per_page.max(1));

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((total, users))
    }
}
