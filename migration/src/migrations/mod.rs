pub mod m202510010001_create_countries;
pub mod m202510010002_create_categories;
pub mod m202510010003_create_cities;
pub mod m202510010004_create_users;
pub mod m202510010005_create_attractions;
pub mod m202510010006_create_comments;
