//! SolarPlant — the sole domain record: a named installation with a
//! geospatial footprint carried as textual GeoJSON.

use serde::{Deserialize, Serialize};

use crate::error::SolarMapError;
use crate::geometry;
use crate::id::SolarPlantId;

/// A solar plant installation with a name and a GeoJSON geometry.
///
/// The `geometry` field holds the GeoJSON text verbatim; it is validated
/// structurally on construction and on every mutation through the service
/// layer, but never re-serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarPlant {
    pub id: SolarPlantId,
    pub name: String,
    pub geometry: String,
}

impl SolarPlant {
    /// Create a builder for constructing a [`SolarPlant`].
    #[must_use]
    pub fn builder() -> SolarPlantBuilder {
        SolarPlantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::Validation`] when `name` is empty or
    /// `geometry` is not a well-formed GeoJSON geometry.
    pub fn validate(&self) -> Result<(), SolarMapError> {
        if self.name.is_empty() {
            return Err(crate::error::ValidationError::EmptyName.into());
        }
        geometry::validate(&self.geometry)?;
        Ok(())
    }
}

/// Step-by-step builder for [`SolarPlant`].
#[derive(Debug, Default)]
pub struct SolarPlantBuilder {
    id: Option<SolarPlantId>,
    name: Option<String>,
    geometry: Option<String>,
}

impl SolarPlantBuilder {
    #[must_use]
    pub fn id(mut self, id: SolarPlantId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Consume the builder, validate, and return a [`SolarPlant`].
    ///
    /// A fresh id is generated unless one was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::Validation`] if `name` is missing or empty,
    /// or if `geometry` is missing or malformed.
    pub fn build(self) -> Result<SolarPlant, SolarMapError> {
        let plant = SolarPlant {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            geometry: self.geometry.unwrap_or_default(),
        };
        plant.validate()?;
        Ok(plant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const POINT: &str = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;

    #[test]
    fn should_build_valid_plant_when_name_and_geometry_provided() {
        let plant = SolarPlant::builder()
            .name("Brandenburg Sued")
            .geometry(POINT)
            .build()
            .unwrap();
        assert_eq!(plant.name, "Brandenburg Sued");
        assert_eq!(plant.geometry, POINT);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = SolarPlant::builder().geometry(POINT).build();
        assert!(matches!(
            result,
            Err(SolarMapError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_geometry_is_missing() {
        let result = SolarPlant::builder().name("Plant").build();
        assert!(matches!(
            result,
            Err(SolarMapError::Validation(
                ValidationError::InvalidGeometry(_)
            ))
        ));
    }

    #[test]
    fn should_keep_supplied_id() {
        let id = SolarPlantId::new();
        let plant = SolarPlant::builder()
            .id(id)
            .name("Plant")
            .geometry(POINT)
            .build()
            .unwrap();
        assert_eq!(plant.id, id);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let plant = SolarPlant::builder()
            .name("Plant")
            .geometry(POINT)
            .build()
            .unwrap();
        let json = serde_json::to_string(&plant).unwrap();
        let parsed: SolarPlant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, plant.id);
        assert_eq!(parsed.name, plant.name);
        assert_eq!(parsed.geometry, plant.geometry);
    }
}
