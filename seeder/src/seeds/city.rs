use tracing::{debug, info, warn};

use db::models::country;

use crate::batch::{BatchWriter, FlushPolicy};
use crate::error::SeedError;
use crate::factories::make_city;
use crate::generator::ContentGenerator;
use crate::naming::city_names;
use crate::seeds::deficit;
use crate::store::{Store, Table, city_key};

const FLUSH_EVERY: u64 = 200;

/// Suffixes run from 2 up to, but excluding, this bound.
pub const SUFFIX_LIMIT: u32 = 9999;

/// `(country_id, city name)` candidates for every known country.
///
/// Countries without a built-in name list contribute one `"<Name> City"` entry.
pub fn city_pool(countries: &[country::Model]) -> Vec<(i64, String)> {
    let mut pool = Vec::new();
    for co in countries {
        match city_names(&co.code) {
            Some(names) => pool.extend(names.iter().map(|n| (co.id, n.to_string()))),
            None => pool.push((co.id, format!("{} City", co.name))),
        }
    }
    pool
}

pub async fn seed_cities<S, G>(store: &S, generator: &mut G, target: u64) -> Result<u64, SeedError>
where
    S: Store + ?Sized,
    G: ContentGenerator,
{
    let needed = deficit(target, store.count(Table::Cities).await?);
    if needed == 0 {
        debug!(target, "cities already at target");
        return Ok(0);
    }

    let mut pool = city_pool(&store.countries().await?);
    if pool.is_empty() {
        warn!(needed, "no countries to place cities in; skipping");
        return Ok(0);
    }
    generator.shuffle(&mut pool);

    let mut keys = store.existing_keys(Table::Cities).await?;
    let mut writer = BatchWriter::new(store, FlushPolicy::EveryRows(FLUSH_EVERY));

    for (country_id, name) in &pool {
        if writer.created() >= needed {
            break;
        }
        if keys.insert(city_key(name, *country_id)) {
            writer.push(make_city(name.as_str(), *country_id)).await?;
        }
    }

    let mut suffix = 2;
    while writer.created() < needed && suffix < SUFFIX_LIMIT {
        for (country_id, name) in &pool {
            if writer.created() >= needed {
                break;
            }
            let name = format!("{name} {suffix}");
            if keys.insert(city_key(&name, *country_id)) {
                writer.push(make_city(name, *country_id)).await?;
            }
        }
        suffix += 1;
    }

    let created = writer.finish().await?;
    if created < needed {
        warn!(needed, created, "city name pool exhausted");
    }
    info!(created, "cities seeded");
    Ok(created)
}
