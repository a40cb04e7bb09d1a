//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod solar_plants;

use axum::Router;
use axum::routing::get;

use solarmap_app::ports::SolarPlantRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/solarplants",
            get(solar_plants::list::<R>).post(solar_plants::create::<R>),
        )
        .route(
            "/solarplants/{id}",
            get(solar_plants::get::<R>)
                .put(solar_plants::update::<R>)
                .patch(solar_plants::patch::<R>)
                .delete(solar_plants::delete::<R>),
        )
}
