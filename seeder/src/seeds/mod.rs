//! One population stage per seeded table.
//!
//! Each stage reads the current state of its table once, generates only the
//! deficit, and writes through a [`crate::batch::BatchWriter`]. Stages return
//! the number of rows they created.

pub mod attraction;
pub mod category;
pub mod city;
pub mod comment;
pub mod country;
pub mod user;

pub use attraction::seed_attractions;
pub use category::seed_categories;
pub use city::seed_cities;
pub use comment::seed_comments;
pub use country::seed_countries;
pub use user::seed_users;

/// Rows still missing to reach `target`.
pub(crate) fn deficit(target: u64, current: u64) -> u64 {
    target.saturating_sub(current)
}
