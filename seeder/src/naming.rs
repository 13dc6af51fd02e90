//! Built-in naming tables used by the factories.

/// Country codes seeded when configuration supplies none.
pub const FALLBACK_COUNTRY_CODES: [&str; 4] = ["SE", "NO", "FI", "DK"];

pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Restaurant",
    "Cafe",
    "Architecture",
    "Museum",
    "Park",
    "Monument",
    "Viewpoint",
    "Beach",
    "Nature",
];

pub const ADJECTIVES: [&str; 10] = [
    "Cozy",
    "Classic",
    "Modern",
    "Scenic",
    "Iconic",
    "Hidden",
    "Grand",
    "Riverside",
    "Old Town",
    "Harbor",
];

const COUNTRY_NAMES: [(&str, &str); 4] = [
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("FI", "Finland"),
    ("DK", "Denmark"),
];

const CITY_NAMES: [(&str, &[&str]); 4] = [
    (
        "SE",
        &[
            "Stockholm",
            "Göteborg",
            "Malmö",
            "Uppsala",
            "Västerås",
            "Örebro",
            "Linköping",
            "Helsingborg",
            "Jönköping",
            "Norrköping",
        ],
    ),
    (
        "NO",
        &["Oslo", "Bergen", "Trondheim", "Stavanger", "Drammen", "Fredrikstad"],
    ),
    (
        "DK",
        &["København", "Aarhus", "Odense", "Aalborg", "Esbjerg", "Randers"],
    ),
    (
        "FI",
        &["Helsingfors", "Esbo", "Tammerfors", "Vanda", "Åbo", "Uleåborg"],
    ),
];

/// Display name for a country code, ignoring case.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Known city names for a country code, ignoring case.
pub fn city_names(code: &str) -> Option<&'static [&'static str]> {
    CITY_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, names)| *names)
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}
