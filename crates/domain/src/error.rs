//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SolarMapError`] via `#[from]`. Storage-layer errors are carried as a
//! boxed source so the domain crate stays free of IO dependencies.

/// Top-level error for all domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SolarMapError {
    /// A domain invariant was violated by caller-supplied data.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A record lookup found nothing.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of [`SolarPlant`](crate::solar_plant::SolarPlant) invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `name` field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The `geometry` field did not hold a valid GeoJSON geometry.
    #[error("geometry is not a valid GeoJSON geometry: {0}")]
    InvalidGeometry(String),

    /// A path or reference id could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by id found no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity name, e.g. `"SolarPlant"`.
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}
