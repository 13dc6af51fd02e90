mod admin_test;
mod attractions_test;
mod countries_cities_test;
mod health_test;
mod lookup_test;
mod smoke_test;
mod users_test;
