//! Incremental population planner.
//!
//! [`DataSeeder`] runs the population stages in dependency order against a
//! [`Store`]. Every stage tops its table up to the target and never touches
//! rows that already exist, so seeding is safe to repeat.

use std::fmt;

use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::SeedTargets;
use crate::error::SeedError;
use crate::generator::ContentGenerator;
use crate::reset;
use crate::seeds;
use crate::stats::SeedStats;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Countries,
    Categories,
    Cities,
    Users,
    Attractions,
    Comments,
}

impl Stage {
    /// Every stage, parents before the tables that reference them.
    pub const ALL: [Stage; 6] = [
        Stage::Countries,
        Stage::Categories,
        Stage::Cities,
        Stage::Users,
        Stage::Attractions,
        Stage::Comments,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Countries => "Countries",
            Stage::Categories => "Categories",
            Stage::Cities => "Cities",
            Stage::Users => "Users",
            Stage::Attractions => "Attractions",
            Stage::Comments => "Comments",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows created by one [`DataSeeder::seed`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub countries: u64,
    pub categories: u64,
    pub cities: u64,
    pub users: u64,
    pub attractions: u64,
    pub comments: u64,
}

impl SeedReport {
    pub fn record(&mut self, stage: Stage, created: u64) {
        match stage {
            Stage::Countries => self.countries = created,
            Stage::Categories => self.categories = created,
            Stage::Cities => self.cities = created,
            Stage::Users => self.users = created,
            Stage::Attractions => self.attractions = created,
            Stage::Comments => self.comments = created,
        }
    }

    pub fn total(&self) -> u64 {
        self.countries + self.categories + self.cities + self.users + self.attractions + self.comments
    }
}

pub struct DataSeeder<'a, S: Store + ?Sized, G: ContentGenerator> {
    store: &'a S,
    generator: G,
}

impl<'a, S: Store + ?Sized, G: ContentGenerator> DataSeeder<'a, S, G> {
    pub fn new(store: &'a S, generator: G) -> Self {
        Self { store, generator }
    }

    /// Runs every stage in order. The first failing stage aborts the run;
    /// batches written before it stay committed.
    pub async fn seed(&mut self, targets: &SeedTargets) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for stage in Stage::ALL {
            let created = self.run_stage(stage, targets).await?;
            report.record(stage, created);
        }
        info!(created = report.total(), "seeding finished");
        Ok(report)
    }

    /// Runs a single stage and returns the number of rows it created.
    pub async fn run_stage(&mut self, stage: Stage, targets: &SeedTargets) -> Result<u64, SeedError> {
        let store = self.store;
        let generator = &mut self.generator;
        match stage {
            Stage::Countries => seeds::seed_countries(store, &targets.countries).await,
            Stage::Categories => seeds::seed_categories(store, &targets.categories).await,
            Stage::Cities => seeds::seed_cities(store, generator, targets.cities).await,
            Stage::Users => seeds::seed_users(store, generator, targets.users).await,
            Stage::Attractions => seeds::seed_attractions(store, generator, targets.attractions).await,
            Stage::Comments => {
                let year = Utc::now().year();
                seeds::seed_comments(store, generator, targets.comments, year).await
            }
        }
    }

    pub async fn clear(&self) -> Result<u64, SeedError> {
        reset::clear(self.store).await
    }

    pub async fn stats(&self) -> Result<SeedStats, SeedError> {
        SeedStats::collect(self.store).await
    }
}
