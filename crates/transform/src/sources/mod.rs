//! Source plugins and their registry.

pub mod memory;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::PluginConfig;
use crate::error::Result;
use crate::fields::Field;
use crate::registry::Registry;

/// Opaque handle the host pipeline threads through to every source.
///
/// Sources never interpret it; they carry it so downstream stages can
/// read it back via [`Source::context`].
#[derive(Debug, Default)]
pub struct Context {
    /// Free-form settings supplied by the host pipeline.
    pub settings: Value,
}

impl Context {
    pub fn new(settings: Value) -> Self {
        Self { settings }
    }
}

/// A producer of fields.
pub trait Source: std::fmt::Debug + Send + Sync {
    /// The key this source is registered under.
    fn name(&self) -> &'static str;

    /// Produce this source's fields.
    fn fetch(&self) -> Result<Vec<Field>>;

    /// Store the pipeline context on this source.
    fn attach_context(&mut self, context: Arc<Context>);

    /// The attached context, `None` until [`Source::attach_context`]
    /// runs.
    fn context(&self) -> Option<&Arc<Context>>;
}

pub type BoxedSource = Box<dyn Source>;

static SOURCE_REGISTRY: Lazy<Registry<BoxedSource>> = Lazy::new(|| {
    let mut registry = Registry::new("source");
    registry.register("memory", |options| {
        Ok(Box::new(memory::MemorySource::from_options(options)?) as BoxedSource)
    });
    registry
});

/// The process-wide source registry, populated once at first use.
pub fn source_registry() -> &'static Registry<BoxedSource> {
    &SOURCE_REGISTRY
}

/// Create a source from the given context and configuration.
///
/// Resolves the constructor by the configuration's type key, attaches
/// the context to the constructed source and returns it. An unresolvable
/// key propagates the registry's error unchanged; no partially
/// constructed source escapes.
pub fn create_source(context: Arc<Context>, config: &PluginConfig) -> Result<BoxedSource> {
    let mut source = source_registry().from_config(config)?;
    source.attach_context(context);
    Ok(source)
}
