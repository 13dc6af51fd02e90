//! Schema migrations for the travel database.
//!
//! Tables are created in dependency order so that every foreign key points at
//! a table that already exists.

pub mod migrations;
mod migrator;

pub use migrator::Migrator;
pub use sea_orm_migration::MigratorTrait;
