//! Deterministic, idempotent synthetic data for the travel schema.
//!
//! [`DataSeeder`] tops each table up to a [`SeedTargets`] value in dependency
//! order, writing through the [`store::Store`] gateway in batches, and can
//! clear every seeded table again.

pub mod batch;
pub mod config;
pub mod error;
pub mod factories;
pub mod generator;
pub mod naming;
pub mod planner;
pub mod reset;
pub mod seed;
pub mod seeds;
pub mod stats;
pub mod store;

pub use config::{CommentRange, RawSeedOptions, SeedTargets, normalize};
pub use error::SeedError;
pub use generator::{ContentGenerator, FakeGenerator, first_non_empty};
pub use planner::{DataSeeder, SeedReport, Stage};
pub use stats::SeedStats;
pub use store::Store;
