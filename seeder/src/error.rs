use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a seeding, clearing or stats operation.
///
/// Store errors are never swallowed by the engine: whatever was flushed before
/// the failure stays committed, and a later run fills the remaining deficit.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store operation failed: {0}")]
    Store(#[from] DbErr),
}
