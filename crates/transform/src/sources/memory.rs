//! In-memory source: fields materialized straight from configuration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::fields::{Field, FieldMetadata};
use crate::sources::{Context, Source};

fn default_reference_time() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    param: String,
    #[serde(default)]
    units: String,
    #[serde(default)]
    level: String,
    #[serde(default = "default_reference_time")]
    reference_time: DateTime<Utc>,
    values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemoryOptions {
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

/// A source whose fields come from its own configuration.
///
/// Useful for exercising a pipeline without any data I/O.
#[derive(Debug)]
pub struct MemorySource {
    fields: Vec<Field>,
    context: Option<Arc<Context>>,
}

impl MemorySource {
    pub fn from_options(options: &Value) -> Result<Self> {
        let options: MemoryOptions = serde_json::from_value(options.clone())?;
        let fields = options
            .fields
            .into_iter()
            .map(|entry| {
                Field::new(
                    entry.values,
                    FieldMetadata {
                        param: entry.param,
                        units: entry.units,
                        level: entry.level,
                        reference_time: entry.reference_time,
                    },
                )
            })
            .collect();
        Ok(Self {
            fields,
            context: None,
        })
    }
}

impl Source for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self) -> Result<Vec<Field>> {
        Ok(self.fields.clone())
    }

    fn attach_context(&mut self, context: Arc<Context>) {
        self.context = Some(context);
    }

    fn context(&self) -> Option<&Arc<Context>> {
        self.context.as_ref()
    }
}
