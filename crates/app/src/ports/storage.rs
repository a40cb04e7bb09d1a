//! Storage port — repository trait for persistence.

use std::future::Future;

use solarmap_domain::error::SolarMapError;
use solarmap_domain::id::SolarPlantId;
use solarmap_domain::solar_plant::SolarPlant;

/// Persistence operations for [`SolarPlant`] records.
///
/// Methods return `impl Future` rather than using `async fn` so that the
/// `Send` bound can be stated explicitly, keeping implementations usable
/// from multi-threaded executors.
pub trait SolarPlantRepository {
    /// Persist a new record.
    fn create(
        &self,
        plant: SolarPlant,
    ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send;

    /// Fetch a record by id, `None` when absent.
    fn get_by_id(
        &self,
        id: SolarPlantId,
    ) -> impl Future<Output = Result<Option<SolarPlant>, SolarMapError>> + Send;

    /// Fetch all records.
    fn get_all(&self) -> impl Future<Output = Result<Vec<SolarPlant>, SolarMapError>> + Send;

    /// Overwrite an existing record, matched by id.
    fn update(
        &self,
        plant: SolarPlant,
    ) -> impl Future<Output = Result<SolarPlant, SolarMapError>> + Send;

    /// Remove a record by id. Removing an absent id is not an error here;
    /// existence checks are the service's concern.
    fn delete(&self, id: SolarPlantId)
    -> impl Future<Output = Result<(), SolarMapError>> + Send;
}
