//! Store gateway used by the seeding engine.
//!
//! The engine only needs a handful of table-level operations, so it talks to
//! the database through [`Store`] rather than through SeaORM directly. The
//! production implementation is [`DatabaseConnection`]; tests may substitute
//! their own.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QuerySelect,
};

use db::models::{attraction, category, city, comment, country, user_account};

use crate::factories::{NewAttraction, NewCategory, NewCity, NewComment, NewCountry, NewUser};

/// The six seeded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Countries,
    Categories,
    Cities,
    Users,
    Attractions,
    Comments,
}

impl Table {
    /// Creation order: every table comes after the tables it references.
    pub const SEED_ORDER: [Table; 6] = [
        Table::Countries,
        Table::Categories,
        Table::Cities,
        Table::Users,
        Table::Attractions,
        Table::Comments,
    ];

    /// Deletion order: dependents before their dependencies.
    pub const DELETE_ORDER: [Table; 6] = [
        Table::Comments,
        Table::Attractions,
        Table::Users,
        Table::Cities,
        Table::Categories,
        Table::Countries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Countries => "countries",
            Table::Categories => "categories",
            Table::Cities => "cities",
            Table::Users => "users",
            Table::Attractions => "attractions",
            Table::Comments => "comments",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized natural key of a country code.
pub fn country_key(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Natural key of a city: the name is case-sensitive, scoped to its country.
pub fn city_key(name: &str, country_id: i64) -> String {
    format!("{name}|{country_id}")
}

/// Normalized natural key of an email address.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// SQLite refuses statements with more bound parameters than this.
pub const SQLITE_MAX_VARIABLES: usize = 32_766;

/// Rows of one table waiting to be written together.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Countries(Vec<NewCountry>),
    Categories(Vec<NewCategory>),
    Cities(Vec<NewCity>),
    Users(Vec<NewUser>),
    Attractions(Vec<NewAttraction>),
    Comments(Vec<NewComment>),
}

impl Batch {
    pub fn table(&self) -> Table {
        match self {
            Batch::Countries(_) => Table::Countries,
            Batch::Categories(_) => Table::Categories,
            Batch::Cities(_) => Table::Cities,
            Batch::Users(_) => Table::Users,
            Batch::Attractions(_) => Table::Attractions,
            Batch::Comments(_) => Table::Comments,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Batch::Countries(rows) => rows.len(),
            Batch::Categories(rows) => rows.len(),
            Batch::Cities(rows) => rows.len(),
            Batch::Users(rows) => rows.len(),
            Batch::Attractions(rows) => rows.len(),
            Batch::Comments(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Columns bound per row by the insert statement.
    pub fn columns(&self) -> usize {
        match self {
            Batch::Countries(_) => 2,
            Batch::Categories(_) => 1,
            Batch::Cities(_) => 2,
            Batch::Users(_) => 2,
            Batch::Attractions(_) => 9,
            Batch::Comments(_) => 4,
        }
    }

    /// Most rows one statement can carry without exceeding [`SQLITE_MAX_VARIABLES`].
    pub fn rows_per_statement(&self) -> usize {
        (SQLITE_MAX_VARIABLES / self.columns()).max(1)
    }

    /// Splits the batch into consecutive pieces of at most `rows` rows each.
    pub fn split(self, rows: usize) -> Vec<Batch> {
        let rows = rows.max(1);
        match self {
            Batch::Countries(all) => chunked(all, rows, Batch::Countries),
            Batch::Categories(all) => chunked(all, rows, Batch::Categories),
            Batch::Cities(all) => chunked(all, rows, Batch::Cities),
            Batch::Users(all) => chunked(all, rows, Batch::Users),
            Batch::Attractions(all) => chunked(all, rows, Batch::Attractions),
            Batch::Comments(all) => chunked(all, rows, Batch::Comments),
        }
    }
}

fn chunked<T>(all: Vec<T>, rows: usize, wrap: fn(Vec<T>) -> Batch) -> Vec<Batch> {
    let mut out = Vec::with_capacity(all.len().div_ceil(rows));
    let mut iter = all.into_iter().peekable();
    while iter.peek().is_some() {
        out.push(wrap(iter.by_ref().take(rows).collect()));
    }
    out
}

/// A row type that can be staged by the batch controller.
pub trait Staged: Send + Sized {
    fn into_batch(rows: Vec<Self>) -> Batch;
}

impl Staged for NewCountry {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Countries(rows)
    }
}

impl Staged for NewCategory {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Categories(rows)
    }
}

impl Staged for NewCity {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Cities(rows)
    }
}

impl Staged for NewUser {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Users(rows)
    }
}

impl Staged for NewAttraction {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Attractions(rows)
    }
}

impl Staged for NewComment {
    fn into_batch(rows: Vec<Self>) -> Batch {
        Batch::Comments(rows)
    }
}

/// Table-level operations the seeding engine relies on.
#[async_trait]
pub trait Store: Send + Sync {
    async fn count(&self, table: Table) -> Result<u64, DbErr>;

    /// Normalized natural keys already present in `table`.
    ///
    /// Keys use [`country_key`], [`city_key`] and [`email_key`]; category names
    /// are returned verbatim. Tables without a natural key yield an empty set.
    async fn existing_keys(&self, table: Table) -> Result<HashSet<String>, DbErr>;

    async fn countries(&self) -> Result<Vec<country::Model>, DbErr>;

    async fn categories(&self) -> Result<Vec<category::Model>, DbErr>;

    async fn cities(&self) -> Result<Vec<city::Model>, DbErr>;

    /// Surrogate ids of every row in `table`, ascending.
    async fn ids(&self, table: Table) -> Result<Vec<i64>, DbErr>;

    /// Ids of attractions that have at least one comment.
    async fn commented_attraction_ids(&self) -> Result<HashSet<i64>, DbErr>;

    /// Writes a batch and returns the number of rows written.
    ///
    /// Implementations may split a batch across several statements.
    async fn insert(&self, batch: Batch) -> Result<u64, DbErr>;

    /// Deletes every row of `table` and returns how many were removed.
    async fn delete_all(&self, table: Table) -> Result<u64, DbErr>;
}

#[async_trait]
impl Store for DatabaseConnection {
    async fn count(&self, table: Table) -> Result<u64, DbErr> {
        match table {
            Table::Countries => country::Entity::find().count(self).await,
            Table::Categories => category::Entity::find().count(self).await,
            Table::Cities => city::Entity::find().count(self).await,
            Table::Users => user_account::Entity::find().count(self).await,
            Table::Attractions => attraction::Entity::find().count(self).await,
            Table::Comments => comment::Entity::find().count(self).await,
        }
    }

    async fn existing_keys(&self, table: Table) -> Result<HashSet<String>, DbErr> {
        let keys = match table {
            Table::Countries => country::Entity::find()
                .select_only()
                .column(country::Column::Code)
                .into_tuple::<String>()
                .all(self)
                .await?
                .iter()
                .map(|code| country_key(code))
                .collect(),
            Table::Categories => category::Entity::find()
                .select_only()
                .column(category::Column::Name)
                .into_tuple::<String>()
                .all(self)
                .await?
                .into_iter()
                .collect(),
            Table::Cities => city::Entity::find()
                .select_only()
                .column(city::Column::Name)
                .column(city::Column::CountryId)
                .into_tuple::<(String, i64)>()
                .all(self)
                .await?
                .iter()
                .map(|(name, country_id)| city_key(name, *country_id))
                .collect(),
            Table::Users => user_account::Entity::find()
                .select_only()
                .column(user_account::Column::Email)
                .into_tuple::<String>()
                .all(self)
                .await?
                .iter()
                .map(|email| email_key(email))
                .collect(),
            Table::Attractions | Table::Comments => HashSet::new(),
        };
        Ok(keys)
    }

    async fn countries(&self) -> Result<Vec<country::Model>, DbErr> {
        country::Entity::find().all(self).await
    }

    async fn categories(&self) -> Result<Vec<category::Model>, DbErr> {
        category::Entity::find().all(self).await
    }

    async fn cities(&self) -> Result<Vec<city::Model>, DbErr> {
        city::Entity::find().all(self).await
    }

    async fn ids(&self, table: Table) -> Result<Vec<i64>, DbErr> {
        let mut ids = match table {
            Table::Countries => ids_of::<country::Entity, _>(self, country::Column::Id).await?,
            Table::Categories => ids_of::<category::Entity, _>(self, category::Column::Id).await?,
            Table::Cities => ids_of::<city::Entity, _>(self, city::Column::Id).await?,
            Table::Users => ids_of::<user_account::Entity, _>(self, user_account::Column::Id).await?,
            Table::Attractions => {
                ids_of::<attraction::Entity, _>(self, attraction::Column::Id).await?
            }
            Table::Comments => ids_of::<comment::Entity, _>(self, comment::Column::Id).await?,
        };
        ids.sort_unstable();
        Ok(ids)
    }

    async fn commented_attraction_ids(&self) -> Result<HashSet<i64>, DbErr> {
        let ids = comment::Entity::find()
            .select_only()
            .column(comment::Column::AttractionId)
            .distinct()
            .into_tuple::<i64>()
            .all(self)
            .await?;
        Ok(ids.into_iter().collect())
    }

    async fn insert(&self, batch: Batch) -> Result<u64, DbErr> {
        if batch.is_empty() {
            return Ok(0);
        }

        let rows = batch.rows_per_statement();
        let mut written = 0;
        for piece in batch.split(rows) {
            written += insert_statement(self, piece).await?;
        }
        Ok(written)
    }

    async fn delete_all(&self, table: Table) -> Result<u64, DbErr> {
        let result = match table {
            Table::Countries => country::Entity::delete_many().exec(self).await?,
            Table::Categories => category::Entity::delete_many().exec(self).await?,
            Table::Cities => city::Entity::delete_many().exec(self).await?,
            Table::Users => user_account::Entity::delete_many().exec(self).await?,
            Table::Attractions => attraction::Entity::delete_many().exec(self).await?,
            Table::Comments => comment::Entity::delete_many().exec(self).await?,
        };
        Ok(result.rows_affected)
    }
}

async fn insert_statement(db: &DatabaseConnection, batch: Batch) -> Result<u64, DbErr> {
    match batch {
        Batch::Countries(rows) => {
            country::Entity::insert_many(rows.into_iter().map(country::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
        Batch::Categories(rows) => {
            category::Entity::insert_many(rows.into_iter().map(category::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
        Batch::Cities(rows) => {
            city::Entity::insert_many(rows.into_iter().map(city::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
        Batch::Users(rows) => {
            user_account::Entity::insert_many(rows.into_iter().map(user_account::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
        Batch::Attractions(rows) => {
            attraction::Entity::insert_many(rows.into_iter().map(attraction::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
        Batch::Comments(rows) => {
            comment::Entity::insert_many(rows.into_iter().map(comment::ActiveModel::from))
                .exec_without_returning(db)
                .await
        }
    }
}

async fn ids_of<E, C>(db: &DatabaseConnection, id: C) -> Result<Vec<i64>, DbErr>
where
    E: EntityTrait,
    C: sea_orm::ColumnTrait,
{
    E::find()
        .select_only()
        .column(id)
        .into_tuple::<i64>()
        .all(db)
        .await
}
