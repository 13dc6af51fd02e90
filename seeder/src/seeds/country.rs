use tracing::info;

use crate::batch::{BatchWriter, FlushPolicy};
use crate::error::SeedError;
use crate::factories::make_country;
use crate::naming::FALLBACK_COUNTRY_CODES;
use crate::store::{Store, Table, country_key};

/// Trimmed, uppercased, de-duplicated codes, in first-seen order.
///
/// Falls back to the built-in codes when `codes` holds nothing usable.
pub fn wanted_codes(codes: &[String]) -> Vec<String> {
    let mut wanted: Vec<String> = Vec::new();
    for code in codes.iter().map(|c| country_key(c)) {
        if !code.is_empty() && !wanted.contains(&code) {
            wanted.push(code);
        }
    }

    if wanted.is_empty() {
        wanted = FALLBACK_COUNTRY_CODES.iter().map(|c| c.to_string()).collect();
    }
    wanted
}

pub async fn seed_countries<S: Store + ?Sized>(store: &S, codes: &[String]) -> Result<u64, SeedError> {
    let existing = store.existing_keys(Table::Countries).await?;
    let mut writer = BatchWriter::new(store, FlushPolicy::AtEnd);

    for code in wanted_codes(codes) {
        if !existing.contains(&code) {
            writer.push(make_country(&code)).await?;
        }
    }

    let created = writer.finish().await?;
    info!(created, "countries seeded");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::country;
    use db::test_utils::setup_test_db;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn wanted_codes_normalizes_and_dedups() {
        assert_eq!(wanted_codes(&codes(&[" se", "NO", "Se", " "])), vec!["SE", "NO"]);
    }

    #[test]
    fn wanted_codes_falls_back_when_nothing_usable() {
        assert_eq!(wanted_codes(&[]), vec!["SE", "NO", "FI", "DK"]);
        assert_eq!(wanted_codes(&codes(&["", "  "])), vec!["SE", "NO", "FI", "DK"]);
    }

    #[tokio::test]
    async fn creates_only_missing_codes() {
        let db = setup_test_db().await;
        country::Model::create(&db, "se", "Sverige").await.unwrap();

        let created = seed_countries(&db, &codes(&["SE", "is"])).await.unwrap();
        assert_eq!(created, 1);

        let iceland = country::Model::get_by_code(&db, "IS").await.unwrap().unwrap();
        assert_eq!(iceland.name, "IS");
        let sweden = country::Model::get_by_code(&db, "SE").await.unwrap().unwrap();
        assert_eq!(sweden.name, "Sverige");

        assert_eq!(seed_countries(&db, &codes(&["SE", "IS"])).await.unwrap(), 0);
    }
}
