pub mod attraction;
pub mod category;
pub mod city;
pub mod comment;
pub mod country;
pub mod user_account;

pub use attraction::Entity as Attraction;
pub use category::Entity as Category;
pub use city::Entity as City;
pub use comment::Entity as Comment;
pub use country::Entity as Country;
pub use user_account::Entity as UserAccount;
