use db::models::{city, country};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CountryLookup {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub city_count: u64,
}

impl From<(country::Model, u64)> for CountryLookup {
    fn from((country, city_count): (country::Model, u64)) -> Self {
        Self {
            id: country.id,
            code: country.code,
            name: country.name,
            city_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CityLookup {
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub country_name: String,
}

impl From<(city::Model, country::Model)> for CityLookup {
    fn from((city, country): (city::Model, country::Model)) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_code: country.code,
            country_name: country.name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CitiesQuery {
    /// Country code; blank means all countries.
    pub country: Option<String>,
}
