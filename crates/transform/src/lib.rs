//! Plugin-based transforms for meteorological fields.
//!
//! The library carries two independent plugin kinds, each resolved by a
//! string key from its own process-wide registry:
//!
//! - **Filters** consume bound input fields and emit transformed fields.
//!   Inputs are declared through an explicit [`MatchSpec`] descriptor and
//!   bound by the [`apply_filter`] driver.
//! - **Sources** produce fields on demand and carry an attached
//!   [`Context`] handle from the host pipeline.
//!
//! Registries are populated once at first use and read-only thereafter;
//! duplicate registration is a startup programming error and panics.

pub mod config;
pub mod error;
pub mod fields;
pub mod filters;
pub mod matching;
pub mod registry;
pub mod sources;

pub use config::PluginConfig;
pub use error::{Result, TransformError};
pub use fields::{Field, FieldMetadata};
pub use filters::nordic_pp::NordicPp;
pub use filters::{create_filter, filter_registry, BoxedFilter, Filter};
pub use matching::{apply_filter, MatchRule, MatchSpec};
pub use registry::Registry;
pub use sources::memory::MemorySource;
pub use sources::{create_source, source_registry, BoxedSource, Context, Source};
