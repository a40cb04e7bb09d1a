//! # solarmap-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound):
//!   - `SolarPlantRepository` — CRUD for solar plants
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SolarPlantService` — create, get, list, replace, patch, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `solarmap-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
