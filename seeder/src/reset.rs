use tracing::{debug, info};

use crate::error::SeedError;
use crate::store::{Store, Table};

/// Deletes every seeded row, dependents first. Returns the total removed.
pub async fn clear<S: Store + ?Sized>(store: &S) -> Result<u64, SeedError> {
    let mut total = 0;
    for table in Table::DELETE_ORDER {
        let removed = store.delete_all(table).await?;
        debug!(table = %table, removed, "table cleared");
        total += removed;
    }
    info!(removed = total, "store cleared");
    Ok(total)
}
