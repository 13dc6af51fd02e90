pub mod models;
pub mod test_utils;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Opens a connection for `path_or_url`.
///
/// A DSN is used as-is; anything else is treated as a SQLite file path whose
/// parent directory is created first (SQLite won't create intermediate dirs).
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = util::config::database_url(path_or_url);
    if url.starts_with("sqlite://") {
        if let Some(parent) = Path::new(path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    tracing::debug!(target: "db", url = %url, "connecting");
    Database::connect(&url).await
}

/// Applies any pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
