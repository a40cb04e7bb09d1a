//! `SQLite` implementation of [`SolarPlantRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use solarmap_app::ports::SolarPlantRepository;
use solarmap_domain::error::SolarMapError;
use solarmap_domain::id::SolarPlantId;
use solarmap_domain::solar_plant::SolarPlant;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`SolarPlant`].
struct Wrapper(SolarPlant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<SolarPlant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let geometry: String = row.try_get("geometry")?;

        let id =
            SolarPlantId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(SolarPlant { id, name, geometry }))
    }
}

const INSERT: &str = "INSERT INTO solar_plants (id, name, geometry) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM solar_plants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM solar_plants";
const UPDATE: &str = "UPDATE solar_plants SET name = ?, geometry = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM solar_plants WHERE id = ?";

/// `SQLite`-backed solar plant repository.
pub struct SqliteSolarPlantRepository {
    pool: SqlitePool,
}

impl SqliteSolarPlantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SolarPlantRepository for SqliteSolarPlantRepository {
    fn create(
        &self,
        plant: SolarPlant,
    ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(plant.id.to_string())
                .bind(&plant.name)
                .bind(&plant.geometry)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(plant)
        }
    }

    fn get_by_id(
        &self,
        id: SolarPlantId,
    ) -> impl Future<Output = Result<Option<SolarPlant>, SolarMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SolarPlant>, SolarMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        plant: SolarPlant,
    ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&plant.name)
                .bind(&plant.geometry)
                .bind(plant.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(plant)
        }
    }

    fn delete(
        &self,
        id: SolarPlantId,
    ) -> impl Future<Output = Result<(), SolarMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
