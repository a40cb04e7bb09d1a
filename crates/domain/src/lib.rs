//! # solarmap-domain
//!
//! Pure domain model for the solarmap plant registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **SolarPlant** record (name + textual GeoJSON geometry)
//! - Contain all invariant enforcement (non-empty name, well-formed geometry)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod geometry;
pub mod id;
pub mod solar_plant;
