use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// A city; `(name, country_id)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub country_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_delete = "Restrict"
    )]
    Country,

    #[sea_orm(has_many = "super::attraction::Entity")]
    Attraction,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::attraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attraction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, country_id: i64) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(name.to_owned()),
            country_id: Set(country_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Cities with their country, ordered by country code then city name.
    ///
    /// `country_code` narrows the result to one country (case-insensitive).
    pub async fn list_with_country(
        db: &DbConn,
        country_code: Option<&str>,
    ) -> Result<Vec<(Model, super::country::Model)>, DbErr> {
        let mut query = Entity::find().find_also_related(super::country::Entity);

        if let Some(code) = country_code.map(str::trim).filter(|c| !c.is_empty()) {
            query = query.filter(super::country::Column::Code.eq(code.to_uppercase()));
        }

        let rows = query
            .order_by_asc(super::country::Column::Code)
            .order_by_asc(Column::Name)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(city, country)| country.map(|country| (city, country)))
            .collect())
    }
}
