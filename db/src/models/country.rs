use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A country, identified by its two-letter code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Uppercase ISO-style code, unique regardless of case.
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::city::Entity")]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, code: &str, name: &str) -> Result<Model, DbErr> {
        ActiveModel {
            code: Set(code.to_uppercase()),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Looks up a country by code, ignoring case.
    pub async fn get_by_code(db: &DbConn, code: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Code.eq(code.trim().to_uppercase()))
            .one(db)
            .await
    }

    /// All countries ordered by code, each paired with its number of cities.
    pub async fn all_with_city_counts(db: &DbConn) -> Result<Vec<(Model, u64)>, DbErr> {
        let countries = Entity::find().order_by_asc(Column::Code).all(db).await?;

        let counts: HashMap<i64, i64> = super::city::Entity::find()
            .select_only()
            .column(super::city::Column::CountryId)
            .column_as(Expr::col(super::city::Column::Id).count(), "city_count")
            .group_by(super::city::Column::CountryId)
            .into_tuple::<(i64, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        Ok(countries
            .into_iter()
            .map(|c| {
                let n = counts.get(&c.id).copied().unwrap_or(0).max(0) as u64;
                (c, n)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_uppercases_code() {
        let db = setup_test_db().await;
        let se = Model::create(&db, "se", "Sweden").await.unwrap();
        assert_eq!(se.code, "SE");

        let found = Model::get_by_code(&db, " se ").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(se.id));
    }

    #[tokio::test]
    async fn test_code_is_unique_ignoring_case() {
        let db = setup_test_db().await;
        Model::create(&db, "NO", "Norway").await.unwrap();

        let dup = ActiveModel {
            code: Set("no".into()),
            name: Set("Norway again".into()),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn test_all_with_city_counts() {
        let db = setup_test_db().await;
        let se = Model::create(&db, "SE", "Sweden").await.unwrap();
        Model::create(&db, "DK", "Denmark").await.unwrap();
        city::Model::create(&db, "Stockholm", se.id).await.unwrap();
        city::Model::create(&db, "Malmö", se.id).await.unwrap();

        let rows = Model::all_with_city_counts(&db).await.unwrap();
        let summary: Vec<(String, u64)> = rows.into_iter().map(|(c, n)| (c.code, n)).collect();
        assert_eq!(summary, vec![("DK".to_string(), 0), ("SE".to_string(), 2)]);
    }
}
