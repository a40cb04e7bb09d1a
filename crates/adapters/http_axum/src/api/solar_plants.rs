//! JSON REST handlers for solar plants.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use solarmap_app::ports::SolarPlantRepository;
use solarmap_app::services::solar_plant_service::SolarPlantPatch;
use solarmap_domain::error::ValidationError;
use solarmap_domain::id::SolarPlantId;
use solarmap_domain::solar_plant::SolarPlant;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a solar plant.
#[derive(Deserialize)]
pub struct CreateSolarPlantRequest {
    pub name: String,
    pub geometry: String,
}

/// Request body for fully replacing a solar plant (PUT).
#[derive(Deserialize)]
pub struct UpdateSolarPlantRequest {
    pub name: String,
    pub geometry: String,
}

/// Request body for partially updating a solar plant (PATCH).
#[derive(Deserialize)]
pub struct PatchSolarPlantRequest {
    pub name: Option<String>,
    pub geometry: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SolarPlant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<SolarPlant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SolarPlant>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and patch endpoints.
pub enum UpdateResponse {
    Ok(Json<SolarPlant>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<SolarPlantId, ApiError> {
    SolarPlantId::from_str(id)
        .map_err(|_| {
            ApiError::from(solarmap_domain::error::SolarMapError::from(
                ValidationError::InvalidId(id.to_string()),
            ))
        })
}

/// `GET /api/solarplants`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plants = state.plant_service.list_plants().await?;
    Ok(ListResponse::Ok(Json(plants)))
}

/// `GET /api/solarplants/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    let plant = state.plant_service.get_plant(plant_id).await?;
    Ok(GetResponse::Ok(Json(plant)))
}

/// `POST /api/solarplants`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateSolarPlantRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plant = SolarPlant::builder()
        .name(req.name)
        .geometry(req.geometry)
        .build()?;
    let created = state.plant_service.create_plant(plant).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/solarplants/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSolarPlantRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    let updated = state
        .plant_service
        .replace_plant(plant_id, req.name, req.geometry)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `PATCH /api/solarplants/:id`
pub async fn patch<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<PatchSolarPlantRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    let patched = state
        .plant_service
        .patch_plant(
            plant_id,
            SolarPlantPatch {
                name: req.name,
                geometry: req.geometry,
            },
        )
        .await?;
    Ok(UpdateResponse::Ok(Json(patched)))
}

/// `DELETE /api/solarplants/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: SolarPlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    state.plant_service.delete_plant(plant_id).await?;
    Ok(DeleteResponse::NoContent)
}
