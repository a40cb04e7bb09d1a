//! Shape-level validation of textual GeoJSON geometries.
//!
//! Geometries travel through the API as strings, so validation parses the
//! text and checks the GeoJSON structure without interpreting coordinates.

use serde_json::Value;

use crate::error::ValidationError;

/// GeoJSON geometry types that carry a `coordinates` member.
const COORDINATE_TYPES: [&str; 6] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
];

/// Validate that `text` is a well-formed GeoJSON geometry object.
///
/// Checks that the text parses as a JSON object, that `type` names a
/// recognized geometry, and that the matching payload member is present
/// (`coordinates`, or `geometries` for a `GeometryCollection`).
/// Coordinate arity is intentionally not checked.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidGeometry`] describing the first
/// structural problem found.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| ValidationError::InvalidGeometry(err.to_string()))?;

    let Value::Object(object) = &value else {
        return Err(ValidationError::InvalidGeometry(
            "expected a JSON object".to_string(),
        ));
    };

    let Some(Value::String(kind)) = object.get("type") else {
        return Err(ValidationError::InvalidGeometry(
            "missing \"type\" member".to_string(),
        ));
    };

    if kind == "GeometryCollection" {
        if !matches!(object.get("geometries"), Some(Value::Array(_))) {
            return Err(ValidationError::InvalidGeometry(
                "GeometryCollection requires a \"geometries\" array".to_string(),
            ));
        }
        return Ok(());
    }

    if !COORDINATE_TYPES.contains(&kind.as_str()) {
        return Err(ValidationError::InvalidGeometry(format!(
            "unknown geometry type {kind:?}"
        )));
    }

    if !matches!(object.get("coordinates"), Some(Value::Array(_))) {
        return Err(ValidationError::InvalidGeometry(format!(
            "{kind} requires a \"coordinates\" array"
        )));
    }

    Ok(())
}
