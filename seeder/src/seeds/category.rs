use tracing::info;

use crate::batch::{BatchWriter, FlushPolicy};
use crate::error::SeedError;
use crate::factories::make_category;
use crate::store::{Store, Table};

/// Creates every name in `names` that is not already a category (exact match).
pub async fn seed_categories<S: Store + ?Sized>(store: &S, names: &[String]) -> Result<u64, SeedError> {
    let mut existing = store.existing_keys(Table::Categories).await?;
    let mut writer = BatchWriter::new(store, FlushPolicy::AtEnd);

    for name in names {
        if existing.insert(name.clone()) {
            writer.push(make_category(name)).await?;
        }
    }

    let created = writer.finish().await?;
    info!(created, "categories seeded");
    Ok(created)
}
