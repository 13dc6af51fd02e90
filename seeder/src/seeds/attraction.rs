use tracing::{debug, info, warn};

use crate::batch::{BatchWriter, FlushPolicy};
use crate::error::SeedError;
use crate::factories::make_attraction;
use crate::generator::ContentGenerator;
use crate::seeds::deficit;
use crate::store::{Store, Table};

const FLUSH_EVERY: u64 = 200;

/// Creates attractions, each in a random existing category and city.
pub async fn seed_attractions<S, G>(store: &S, generator: &mut G, target: u64) -> Result<u64, SeedError>
where
    S: Store + ?Sized,
    G: ContentGenerator,
{
    let needed = deficit(target, store.count(Table::Attractions).await?);
    if needed == 0 {
        debug!(target, "attractions already at target");
        return Ok(0);
    }

    let categories = store.categories().await?;
    let cities = store.cities().await?;
    if categories.is_empty() || cities.is_empty() {
        warn!(
            needed,
            categories = categories.len(),
            cities = cities.len(),
            "attractions need both categories and cities; skipping"
        );
        return Ok(0);
    }

    let mut writer = BatchWriter::new(store, FlushPolicy::EveryRows(FLUSH_EVERY));
    for _ in 0..needed {
        let (Some(category), Some(city)) = (generator.pick(&categories), generator.pick(&cities)) else {
            break;
        };
        let row = make_attraction(generator, category, city);
        writer.push(row).await?;
    }

    let created = writer.finish().await?;
    info!(created, "attractions seeded");
    Ok(created)
}
