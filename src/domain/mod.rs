//! Domain entities and value objects, free of persistence and HTTP concerns.

pub mod product;
pub mod types;
