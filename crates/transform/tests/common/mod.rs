//! Shared field fixtures for the integration suites.

use chrono::{DateTime, TimeZone, Utc};
use transform::{Field, FieldMetadata};

/// Reference time used by all radar fixtures.
pub fn radar_reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Metadata for a surface radar quantity.
pub fn radar_metadata(param: &str) -> FieldMetadata {
    FieldMetadata {
        param: param.to_string(),
        units: "kg m-2".to_string(),
        level: "surface".to_string(),
        reference_time: radar_reference_time(),
    }
}

/// An LWE precipitation field with the given payload.
pub fn lwe_field(values: Vec<f32>) -> Field {
    Field::new(values, radar_metadata("lwe"))
}

/// A field under an arbitrary param name.
pub fn named_field(param: &str, values: Vec<f32>) -> Field {
    Field::new(values, radar_metadata(param))
}
