use serde::Serialize;

use crate::error::SeedError;
use crate::store::{Store, Table};

/// Row counts per seeded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedStats {
    pub countries: u64,
    pub cities: u64,
    pub categories: u64,
    pub users: u64,
    pub attractions: u64,
    pub comments: u64,
}

impl SeedStats {
    pub async fn collect<S: Store + ?Sized>(store: &S) -> Result<Self, SeedError> {
        Ok(Self {
            countries: store.count(Table::Countries).await?,
            cities: store.count(Table::Cities).await?,
            categories: store.count(Table::Categories).await?,
            users: store.count(Table::Users).await?,
            attractions: store.count(Table::Attractions).await?,
            comments: store.count(Table::Comments).await?,
        })
    }

    pub fn total(&self) -> u64 {
        self.countries + self.cities + self.categories + self.users + self.attractions + self.comments
    }
}
