//! Filter plugins and their registry.

pub mod nordic_pp;

use once_cell::sync::Lazy;

use crate::config::PluginConfig;
use crate::error::Result;
use crate::fields::Field;
use crate::matching::MatchSpec;
use crate::registry::Registry;

/// A field transform with declaratively matched inputs.
pub trait Filter: std::fmt::Debug + Send + Sync {
    /// The key this filter is registered under.
    fn name(&self) -> &'static str;

    /// The descriptor of this filter's inputs, consumed by
    /// [`crate::matching::apply_filter`].
    fn match_spec(&self) -> MatchSpec;

    /// Transform the bound inputs into output fields. `bound` holds one
    /// field per declared rule, in rule order.
    fn forward_transform(&self, bound: &[Field]) -> Result<Vec<Field>>;
}

pub type BoxedFilter = Box<dyn Filter>;

static FILTER_REGISTRY: Lazy<Registry<BoxedFilter>> = Lazy::new(|| {
    let mut registry = Registry::new("filter");
    registry.register("nordic_pp", |options| {
        Ok(Box::new(nordic_pp::NordicPp::from_options(options)?) as BoxedFilter)
    });
    registry
});

/// The process-wide filter registry, populated once at first use.
pub fn filter_registry() -> &'static Registry<BoxedFilter> {
    &FILTER_REGISTRY
}

/// Resolve and construct a filter from its configuration.
pub fn create_filter(config: &PluginConfig) -> Result<BoxedFilter> {
    filter_registry().from_config(config)
}
