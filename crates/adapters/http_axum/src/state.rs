//! Shared application state for axum handlers.

use std::sync::Arc;

use solarmap_app::ports::SolarPlantRepository;
use solarmap_app::services::solar_plant_service::SolarPlantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Solar plant CRUD service.
    pub plant_service: Arc<SolarPlantService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            plant_service: Arc::clone(&self.plant_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(plant_service: SolarPlantService<R>) -> Self {
        Self {
            plant_service: Arc::new(plant_service),
        }
    }
}
