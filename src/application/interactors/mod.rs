pub mod posts;
pub mod profile;
pub mod users;
