//! Solar plant service — use-cases for managing plant records.

use solarmap_domain::error::{NotFoundError, SolarMapError};
use solarmap_domain::id::SolarPlantId;
use solarmap_domain::solar_plant::SolarPlant;

use crate::ports::SolarPlantRepository;

/// Fields of a partial update. `None` leaves the stored value untouched.
#[derive(Debug, Default)]
pub struct SolarPlantPatch {
    pub name: Option<String>,
    pub geometry: Option<String>,
}

/// Application service for solar plant CRUD operations.
pub struct SolarPlantService<R> {
    repo: R,
}

impl<R: SolarPlantRepository> SolarPlantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new plant after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_plant(&self, plant: SolarPlant) -> Result<SolarPlant, SolarMapError> {
        plant.validate()?;
        let created = self.repo.create(plant).await?;
        tracing::debug!(id = %created.id, "solar plant created");
        Ok(created)
    }

    /// Look up a plant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::NotFound`] when no plant with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_plant(&self, id: SolarPlantId) -> Result<SolarPlant, SolarMapError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "SolarPlant",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all plants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_plants(&self) -> Result<Vec<SolarPlant>, SolarMapError> {
        self.repo.get_all().await
    }

    /// Fully replace the mutable fields of an existing plant (PUT
    /// semantics). The stored id is kept; ids are immutable.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::NotFound`] when `id` does not exist,
    /// [`SolarMapError::Validation`] if the replacement violates
    /// invariants, or a storage error from the repository.
    pub async fn replace_plant(
        &self,
        id: SolarPlantId,
        name: String,
        geometry: String,
    ) -> Result<SolarPlant, SolarMapError> {
        let mut plant = self.get_plant(id).await?;
        plant.name = name;
        plant.geometry = geometry;
        plant.validate()?;
        self.repo.update(plant).await
    }

    /// Apply a partial update to an existing plant (PATCH semantics).
    /// Absent fields keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::NotFound`] when `id` does not exist,
    /// [`SolarMapError::Validation`] if the merged record violates
    /// invariants, or a storage error from the repository.
    pub async fn patch_plant(
        &self,
        id: SolarPlantId,
        patch: SolarPlantPatch,
    ) -> Result<SolarPlant, SolarMapError> {
        let mut plant = self.get_plant(id).await?;
        if let Some(name) = patch.name {
            plant.name = name;
        }
        if let Some(geometry) = patch.geometry {
            plant.geometry = geometry;
        }
        plant.validate()?;
        self.repo.update(plant).await
    }

    /// Delete a plant by id.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::NotFound`] when `id` does not exist, or a
    /// storage error propagated from the repository.
    pub async fn delete_plant(&self, id: SolarPlantId) -> Result<(), SolarMapError> {
        // Fetch first so deleting an absent record surfaces as NotFound.
        self.get_plant(id).await?;
        self.repo.delete(id).await?;
        tracing::debug!(%id, "solar plant deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarmap_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryPlantRepo {
        store: Mutex<HashMap<SolarPlantId, SolarPlant>>,
    }

    impl Default for InMemoryPlantRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl SolarPlantRepository for InMemoryPlantRepo {
        fn create(
            &self,
            plant: SolarPlant,
        ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(plant.id, plant.clone());
            async { Ok(plant) }
        }

        fn get_by_id(
            &self,
            id: SolarPlantId,
        ) -> impl Future<Output = Result<Option<SolarPlant>, SolarMapError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(
            &self,
        ) -> impl Future<Output = Result<Vec<SolarPlant>, SolarMapError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<SolarPlant> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            plant: SolarPlant,
        ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(plant.id, plant.clone());
            async { Ok(plant) }
        }

        fn delete(
            &self,
            id: SolarPlantId,
        ) -> impl Future<Output = Result<(), SolarMapError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    const POINT: &str = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
    const OTHER_POINT: &str = r#"{"type": "Point", "coordinates": [3.0, 4.0]}"#;

    fn make_service() -> SolarPlantService<InMemoryPlantRepo> {
        SolarPlantService::new(InMemoryPlantRepo::default())
    }

    fn valid_plant() -> SolarPlant {
        SolarPlant::builder()
            .name("Test Solar Plant")
            .geometry(POINT)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_plant_when_valid() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;

        let created = svc.create_plant(plant).await.unwrap();
        assert_eq!(created.id, id);

        let fetched = svc.get_plant(id).await.unwrap();
        assert_eq!(fetched.name, "Test Solar Plant");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut plant = valid_plant();
        plant.name = String::new();

        let result = svc.create_plant(plant).await;
        assert!(matches!(
            result,
            Err(SolarMapError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_reject_create_when_geometry_is_malformed() {
        let svc = make_service();
        let mut plant = valid_plant();
        plant.geometry = "{broken".to_string();

        let result = svc.create_plant(plant).await;
        assert!(matches!(
            result,
            Err(SolarMapError::Validation(
                ValidationError::InvalidGeometry(_)
            ))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_plant_missing() {
        let svc = make_service();
        let result = svc.get_plant(SolarPlantId::new()).await;
        assert!(matches!(result, Err(SolarMapError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_plants() {
        let svc = make_service();
        svc.create_plant(valid_plant()).await.unwrap();
        svc.create_plant(
            SolarPlant::builder()
                .name("Second Plant")
                .geometry(OTHER_POINT)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = svc.list_plants().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_replace_plant_keeping_id() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;
        svc.create_plant(plant).await.unwrap();

        let saved = svc
            .replace_plant(id, "Updated Plant".to_string(), OTHER_POINT.to_string())
            .await
            .unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.name, "Updated Plant");
        assert_eq!(saved.geometry, OTHER_POINT);
    }

    #[tokio::test]
    async fn should_return_not_found_when_replacing_missing_plant() {
        let svc = make_service();
        let result = svc
            .replace_plant(
                SolarPlantId::new(),
                "Plant".to_string(),
                POINT.to_string(),
            )
            .await;
        assert!(matches!(result, Err(SolarMapError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_patch_only_geometry_leaving_name() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;
        svc.create_plant(plant).await.unwrap();

        let patched = svc
            .patch_plant(
                id,
                SolarPlantPatch {
                    geometry: Some(OTHER_POINT.to_string()),
                    ..SolarPlantPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.name, "Test Solar Plant");
        assert_eq!(patched.geometry, OTHER_POINT);
    }

    #[tokio::test]
    async fn should_patch_only_name_leaving_geometry() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;
        svc.create_plant(plant).await.unwrap();

        let patched = svc
            .patch_plant(
                id,
                SolarPlantPatch {
                    name: Some("Renamed".to_string()),
                    ..SolarPlantPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.name, "Renamed");
        assert_eq!(patched.geometry, POINT);
    }

    #[tokio::test]
    async fn should_reject_patch_when_merged_record_invalid() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;
        svc.create_plant(plant).await.unwrap();

        let result = svc
            .patch_plant(
                id,
                SolarPlantPatch {
                    name: Some(String::new()),
                    ..SolarPlantPatch::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(SolarMapError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_delete_plant() {
        let svc = make_service();
        let plant = valid_plant();
        let id = plant.id;
        svc.create_plant(plant).await.unwrap();

        svc.delete_plant(id).await.unwrap();

        let result = svc.get_plant(id).await;
        assert!(matches!(result, Err(SolarMapError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_plant() {
        let svc = make_service();
        let result = svc.delete_plant(SolarPlantId::new()).await;
        assert!(matches!(result, Err(SolarMapError::NotFound(_))));
    }
}
