pub mod repositories;
pub mod schema;
pub mod seed;
