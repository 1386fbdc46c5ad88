//! Diesel row types and service configuration.

pub mod config;
pub mod product;
