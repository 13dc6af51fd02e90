use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "attractions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address_line: String,
    pub postal_code: String,
    /// Degrees, within [-90, 90].
    pub latitude: f64,
    /// Degrees, within [-180, 180].
    pub longitude: f64,
    pub is_recommended: bool,
    pub category_id: i64,
    pub city_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Restrict"
    )]
    Category,

    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_delete = "Restrict"
    )]
    City,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The attraction together with its city and that city's country.
    pub async fn find_with_location(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, super::city::Model, super::country::Model)>, DbErr> {
        let Some(attraction) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let place = super::city::Entity::find_by_id(attraction.city_id)
            .find_also_related(super::country::Entity)
            .one(db)
            .await?;

        Ok(match place {
            Some((city, Some(country))) => Some((attraction, city, country)),
            _ => None,
        })
    }
}
