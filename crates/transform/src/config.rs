//! Plugin configuration shape shared by the filter and source registries.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{Result, TransformError};

/// Configuration naming a plugin and carrying its options.
///
/// Two shapes are accepted, matching how pipeline configs name plugins:
///
/// - a bare string: `"nordic_pp"` (no options);
/// - a mapping with a `type` key; every remaining key is handed to the
///   plugin constructor as options, e.g.
///   `{ "type": "nordic_pp", "output": "lwe_clean" }`.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    kind: String,
    options: Value,
}

impl PluginConfig {
    /// Configuration for `kind` with no options.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: Value::Object(Map::new()),
        }
    }

    /// Configuration for `kind` with the given options value.
    pub fn with_options(kind: impl Into<String>, options: Value) -> Self {
        Self {
            kind: kind.into(),
            options,
        }
    }

    /// Parse a configuration value into a plugin selection.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(kind) => Ok(Self::new(kind)),
            Value::Object(mut map) => {
                let kind = match map.remove("type") {
                    Some(Value::String(kind)) => kind,
                    Some(other) => {
                        return Err(TransformError::InvalidConfig(format!(
                            "`type` must be a string, got {other}"
                        )))
                    }
                    None => return Err(TransformError::MissingTypeKey),
                };
                Ok(Self {
                    kind,
                    options: Value::Object(map),
                })
            }
            other => Err(TransformError::InvalidConfig(format!(
                "expected a plugin name or mapping, got {other}"
            ))),
        }
    }

    /// The plugin key this configuration selects.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The options value handed to the plugin constructor.
    pub fn options(&self) -> &Value {
        &self.options
    }
}

impl<'de> Deserialize<'de> for PluginConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}
