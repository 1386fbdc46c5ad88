//! Core library exports for the Vitrine service.
//!
//! Vitrine stores the products shown by an affiliate-link storefront. This
//! crate exposes the domain types, Diesel persistence, payload forms, service
//! layer and actix-web routes used by the `pushkind-vitrine` binary.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
