//! Field model: a named physical quantity with a raw value payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_reference_time() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Metadata describing a field's physical quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Parameter name (e.g., "lwe", "tp").
    pub param: String,
    /// Physical units (e.g., "kg m-2").
    #[serde(default)]
    pub units: String,
    /// Level description (e.g., "surface").
    #[serde(default)]
    pub level: String,
    /// Reference time of the producing model run or observation.
    #[serde(default = "default_reference_time")]
    pub reference_time: DateTime<Utc>,
}

impl FieldMetadata {
    /// Create metadata for a parameter with empty units/level and an
    /// epoch reference time.
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            units: String::new(),
            level: String::new(),
            reference_time: default_reference_time(),
        }
    }
}

/// A field: one physical quantity's values plus its metadata.
///
/// Values are a flat `Vec<f32>` in whatever order the producing grid
/// uses; this library never interprets the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Raw value payload.
    pub values: Vec<f32>,
    /// Quantity metadata.
    pub metadata: FieldMetadata,
}

impl Field {
    /// Create a field from values and metadata.
    pub fn new(values: Vec<f32>, metadata: FieldMetadata) -> Self {
        Self { values, metadata }
    }

    /// Build a field from raw values and a template field.
    ///
    /// Every metadata item of the template is copied onto the new field
    /// except the parameter name, which is overridden with `param`.
    pub fn from_template(values: Vec<f32>, template: &Field, param: impl Into<String>) -> Self {
        let mut metadata = template.metadata.clone();
        metadata.param = param.into();
        Self { values, metadata }
    }

    /// The parameter name of this field.
    pub fn param(&self) -> &str {
        &self.metadata.param
    }

    /// Number of values in the payload.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
