//! # solarmap-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter built on [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Own the connection pool and run embedded migrations
//! - Implement the `SolarPlantRepository` port from `solarmap-app`
//! - Translate between database rows and domain types
//!
//! ## Dependency rule
//! Depends on `solarmap-app` (port trait) and `solarmap-domain` (types).
//! Never imported by them.

pub mod error;
pub mod pool;
pub mod solar_plant_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use solar_plant_repo::SqliteSolarPlantRepository;
