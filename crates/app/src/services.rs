//! Application services — one per aggregate.

pub mod solar_plant_service;
