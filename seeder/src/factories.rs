//! Pure builders for one row of each seeded entity.
//!
//! Factories only shape data. Deciding how many rows to build, and whether a
//! natural key is already taken, belongs to the stages in [`crate::seeds`].

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;

use db::models::{attraction, category, city, comment, country, user_account};

use crate::generator::{ContentGenerator, first_non_empty};
use crate::naming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name: String,
    pub country_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttraction {
    pub title: String,
    pub description: String,
    pub address_line: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_recommended: bool,
    pub category_id: i64,
    pub city_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub attraction_id: i64,
    pub user_account_id: i64,
}

/// A country row for `code`; the name comes from the built-in table or is the code itself.
pub fn make_country(code: &str) -> NewCountry {
    let code = code.trim().to_uppercase();
    let name = naming::country_name(&code).unwrap_or(code.as_str()).to_string();
    NewCountry { code, name }
}

pub fn make_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
    }
}

pub fn make_city(name: impl Into<String>, country_id: i64) -> NewCity {
    NewCity {
        name: name.into(),
        country_id,
    }
}

/// Splits a full name into first and last tokens.
///
/// Missing tokens default to `"User"` and `"Seed"`.
pub fn name_parts(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    let first = parts.first().copied().unwrap_or("User");
    let last = if parts.len() > 1 {
        parts[parts.len() - 1]
    } else {
        "Seed"
    };
    (first.to_string(), last.to_string())
}

/// A user with a generated name and an email derived from it (not yet de-duplicated).
pub fn make_user<G: ContentGenerator>(generator: &mut G) -> NewUser {
    let display_name = generator.full_name();
    let (first, last) = name_parts(&display_name);
    let email = generator.email(&first, &last);
    NewUser {
        display_name,
        email,
    }
}

/// Inserts `n` immediately before the `@` of `email` (or appends it if there is none).
pub fn with_numeral(email: &str, n: u32) -> String {
    match email.find('@') {
        Some(at) => format!("{}{}{}", &email[..at], n, &email[at..]),
        None => format!("{email}{n}"),
    }
}

/// Title phrasing that depends on the category.
pub fn attraction_title<G: ContentGenerator>(
    generator: &mut G,
    category: &str,
    city: &str,
) -> String {
    let adj = pick_str(generator, &naming::ADJECTIVES);
    match category {
        "Restaurant" => {
            let noun = pick_str(generator, &["Bistro", "Restaurant", "Kitchen"]);
            format!("{adj} {noun} {city}")
        }
        "Cafe" => format!("{adj} Café {city}"),
        "Museum" => {
            let noun = pick_str(generator, &["Museum", "Gallery"]);
            format!("{adj} {noun}, {city}")
        }
        "Park" => format!("{adj} Park, {city}"),
        "Beach" => format!("{adj} Beach, {city}"),
        "Viewpoint" => format!("{adj} Viewpoint, {city}"),
        "Monument" => format!("{adj} Monument, {city}"),
        "Architecture" => format!("{adj} Landmark, {city}"),
        other => format!("{adj} {other} in {city}"),
    }
}

/// One or two sentences; the second appears with 60% odds.
pub fn attraction_description<G: ContentGenerator>(generator: &mut G) -> String {
    let first = first_non_empty([
        generator.sentence(),
        generator.quote(),
        Some(generator.words_as_sentence(10)),
    ]);
    if generator.chance(60) {
        let second = first_non_empty([generator.sentence(), Some(generator.words_as_sentence(12))]);
        format!("{first} {second}")
    } else {
        first
    }
}

pub fn make_attraction<G: ContentGenerator>(
    generator: &mut G,
    category: &category::Model,
    city: &city::Model,
) -> NewAttraction {
    let title = attraction_title(generator, &category.name, &city.name);
    let description = attraction_description(generator);
    let address_line = format!("Street {}", generator.next_int(1, 1000));
    let postal_code = format!("{}", generator.next_int(10_000, 100_000));
    let latitude = generator.next_int(-90_000_000, 90_000_001) as f64 / 1_000_000.0;
    let longitude = generator.next_int(-180_000_000, 180_000_001) as f64 / 1_000_000.0;
    let is_recommended = generator.chance(30);

    NewAttraction {
        title,
        description,
        address_line,
        postal_code,
        latitude,
        longitude,
        is_recommended,
        category_id: category.id,
        city_id: city.id,
    }
}

/// A comment dated within one year either side of `current_year`.
pub fn make_comment<G: ContentGenerator>(
    generator: &mut G,
    attraction_id: i64,
    user_account_id: i64,
    current_year: i32,
) -> NewComment {
    let text = first_non_empty([
        generator.sentence(),
        generator.quote(),
        Some(generator.words_as_sentence(8)),
    ]);
    let created_at = generator.timestamp(current_year - 1, current_year + 1);
    NewComment {
        text,
        created_at,
        attraction_id,
        user_account_id,
    }
}

fn pick_str<G: ContentGenerator>(generator: &mut G, options: &[&'static str]) -> &'static str {
    generator.pick(options).copied().unwrap_or_default()
}

impl From<NewCountry> for country::ActiveModel {
    fn from(row: NewCountry) -> Self {
        Self {
            code: Set(row.code),
            name: Set(row.name),
            ..Default::default()
        }
    }
}

impl From<NewCategory> for category::ActiveModel {
    fn from(row: NewCategory) -> Self {
        Self {
            name: Set(row.name),
            ..Default::default()
        }
    }
}

impl From<NewCity> for city::ActiveModel {
    fn from(row: NewCity) -> Self {
        Self {
            name: Set(row.name),
            country_id: Set(row.country_id),
            ..Default::default()
        }
    }
}

impl From<NewUser> for user_account::ActiveModel {
    fn from(row: NewUser) -> Self {
        Self {
            display_name: Set(row.display_name),
            email: Set(row.email),
            ..Default::default()
        }
    }
}

impl From<NewAttraction> for attraction::ActiveModel {
    fn from(row: NewAttraction) -> Self {
        Self {
            title: Set(row.title),
            description: Set(row.description),
            address_line: Set(row.address_line),
            postal_code: Set(row.postal_code),
            latitude: Set(row.latitude),
            longitude: Set(row.longitude),
            is_recommended: Set(row.is_recommended),
            category_id: Set(row.category_id),
            city_id: Set(row.city_id),
            ..Default::default()
        }
    }
}

impl From<NewComment> for comment::ActiveModel {
    fn from(row: NewComment) -> Self {
        Self {
            text: Set(row.text),
            created_at: Set(row.created_at),
            attraction_id: Set(row.attraction_id),
            user_account_id: Set(row.user_account_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FakeGenerator;
    use chrono::Datelike;

    fn category(name: &str) -> category::Model {
        category::Model {
            id: 3,
            name: name.to_string(),
        }
    }

    fn city(name: &str) -> city::Model {
        city::Model {
            id: 11,
            name: name.to_string(),
            country_id: 1,
        }
    }

    #[test]
    fn country_name_falls_back_to_code() {
        assert_eq!(
            make_country("se"),
            NewCountry {
                code: "SE".into(),
                name: "Sweden".into()
            }
        );
        assert_eq!(make_country("xx").name, "XX");
    }

    #[test]
    fn name_parts_defaults_missing_tokens() {
        assert_eq!(name_parts("Ada Byron Lovelace"), ("Ada".into(), "Lovelace".into()));
        assert_eq!(name_parts("Cher"), ("Cher".into(), "Seed".into()));
        assert_eq!(name_parts("   "), ("User".into(), "Seed".into()));
    }

    #[test]
    fn numeral_goes_right_before_the_at_sign() {
        assert_eq!(with_numeral("ada.lovelace@mail.com", 2), "ada.lovelace2@mail.com");
        assert_eq!(with_numeral("no-at-sign", 3), "no-at-sign3");
    }

    #[test]
    fn titles_follow_category_templates() {
        let mut g = FakeGenerator::seeded(10);
        for _ in 0..20 {
            let park = attraction_title(&mut g, "Park", "Oslo");
            assert!(park.ends_with(" Park, Oslo"), "{park}");

            let restaurant = attraction_title(&mut g, "Restaurant", "Bergen");
            assert!(
                ["Bistro", "Restaurant", "Kitchen"]
                    .iter()
                    .any(|n| restaurant.ends_with(&format!("{n} Bergen"))),
                "{restaurant}"
            );

            let nature = attraction_title(&mut g, "Nature", "Vanda");
            assert!(nature.ends_with(" Nature in Vanda"), "{nature}");
        }
    }

    #[test]
    fn attractions_have_valid_coordinates_and_references() {
        let mut g = FakeGenerator::seeded(11);
        let cat = category("Beach");
        let town = city("Åbo");
        for _ in 0..500 {
            let a = make_attraction(&mut g, &cat, &town);
            assert!((-90.0..=90.0).contains(&a.latitude));
            assert!((-180.0..=180.0).contains(&a.longitude));
            assert_eq!((a.category_id, a.city_id), (3, 11));
            assert!(a.address_line.starts_with("Street "));
            assert_eq!(a.postal_code.len(), 5);
            assert!(!a.description.trim().is_empty());
        }
    }

    #[test]
    fn recommended_share_is_roughly_thirty_percent() {
        let mut g = FakeGenerator::seeded(12);
        let cat = category("Museum");
        let town = city("Oslo");
        let recommended = (0..2000)
            .filter(|_| make_attraction(&mut g, &cat, &town).is_recommended)
            .count();
        assert!((450..=750).contains(&recommended), "{recommended}");
    }

    #[test]
    fn comments_are_dated_around_the_current_year() {
        let mut g = FakeGenerator::seeded(13);
        for _ in 0..200 {
            let c = make_comment(&mut g, 5, 6, 2026);
            assert!((2025..=2027).contains(&c.created_at.year()));
            assert_eq!((c.attraction_id, c.user_account_id), (5, 6));
            assert!(!c.text.is_empty());
        }
    }
}
