pub mod forecast;
pub mod summary;
