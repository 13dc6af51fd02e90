//! Seed options and their normalization into [`SeedTargets`].

use serde::Serialize;
use util::config::{ConfigError, optional_var, parse_optional_var, parse_var};

use crate::naming::{FALLBACK_COUNTRY_CODES, default_categories};

pub const MIN_USERS: u64 = 50;
pub const MIN_CITIES: u64 = 100;
pub const MIN_ATTRACTIONS: u64 = 1000;
pub const COMMENTS_MIN: u32 = 0;
pub const COMMENTS_MAX: u32 = 20;

/// Seed options as supplied by the operator, before any correction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSeedOptions {
    pub countries: Vec<String>,
    pub users: u64,
    pub cities: u64,
    pub attractions: u64,
    pub comments_per_attraction_min: i64,
    pub comments_per_attraction_max: i64,
    /// Seed for the content generator; `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

impl RawSeedOptions {
    /// Reads `SEED_*` variables. Unset variables fall back to zero or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let countries = optional_var("SEED_COUNTRIES")
            .map(|list| list.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            countries,
            users: parse_var("SEED_USERS", 0)?,
            cities: parse_var("SEED_CITIES", 0)?,
            attractions: parse_var("SEED_ATTRACTIONS", 0)?,
            comments_per_attraction_min: parse_var("SEED_COMMENTS_MIN", 0)?,
            comments_per_attraction_max: parse_var("SEED_COMMENTS_MAX", 0)?,
            rng_seed: parse_optional_var("SEED_RNG_SEED")?,
        })
    }
}

/// Inclusive comment-count range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentRange {
    min: u32,
    max: u32,
}

impl CommentRange {
    /// Builds a range from possibly misordered or negative bounds.
    ///
    /// Bounds are swapped when out of order and negatives are clamped to zero.
    pub fn new(a: i64, b: i64) -> Self {
        let min = a.min(b).max(0);
        let max = a.max(b).max(min);
        Self {
            min: clamp_u32(min),
            max: clamp_u32(max),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

fn clamp_u32(n: i64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Immutable seeding targets handed to [`crate::DataSeeder::seed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedTargets {
    /// Wanted country codes. Blank entries are ignored by the country stage.
    pub countries: Vec<String>,
    pub categories: Vec<String>,
    pub cities: u64,
    pub users: u64,
    pub attractions: u64,
    pub comments: CommentRange,
}

impl Default for SeedTargets {
    fn default() -> Self {
        normalize(&RawSeedOptions::default())
    }
}

/// Applies the deployment policy to raw options.
///
/// Country codes are trimmed, uppercased, deduplicated and unioned with the
/// fallback codes. Counts are raised to their minimums and the comment range
/// is fixed to `[0, 20]` regardless of what was asked for.
pub fn normalize(raw: &RawSeedOptions) -> SeedTargets {
    let mut countries: Vec<String> = Vec::new();
    let supplied = raw.countries.iter().map(|c| c.trim().to_uppercase());
    let fallback = FALLBACK_COUNTRY_CODES.iter().map(|c| c.to_string());

    for code in supplied.chain(fallback) {
        if !code.is_empty() && !countries.contains(&code) {
            countries.push(code);
        }
    }

    SeedTargets {
        countries,
        categories: default_categories(),
        cities: raw.cities.max(MIN_CITIES),
        users: raw.users.max(MIN_USERS),
        attractions: raw.attractions.max(MIN_ATTRACTIONS),
        comments: CommentRange::new(COMMENTS_MIN.into(), COMMENTS_MAX.into()),
    }
}
