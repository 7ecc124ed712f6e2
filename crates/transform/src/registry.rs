//! String-keyed constructor registries for plugin dispatch.
//!
//! Each plugin kind (filter, source) owns one `Registry` held in a
//! process-wide `Lazy` static. The map is populated in the `Lazy`
//! initializer and never mutated afterwards, so lookups need no locking.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::PluginConfig;
use crate::error::{Result, TransformError};

/// Constructor signature: build a plugin from its options value.
pub type Constructor<T> = fn(&Value) -> Result<T>;

/// An explicit map from plugin keys to constructors.
pub struct Registry<T> {
    name: &'static str,
    entries: HashMap<&'static str, Constructor<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry. `name` appears in error messages and
    /// the duplicate-key panic.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    /// The registry's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a constructor under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already registered. Registration happens once
    /// at startup, so a duplicate is a programming error and must fail
    /// loudly rather than silently overwrite.
    pub fn register(&mut self, key: &'static str, ctor: Constructor<T>) {
        if self.entries.insert(key, ctor).is_some() {
            panic!("duplicate {} registration for key '{}'", self.name, key);
        }
    }

    /// Look up the constructor registered under `key`.
    pub fn lookup(&self, key: &str) -> Option<Constructor<T>> {
        self.entries.get(key).copied()
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Resolve the configuration's type key and construct the plugin.
    ///
    /// An unregistered key yields [`TransformError::UnknownPlugin`];
    /// constructor failures propagate unchanged.
    pub fn from_config(&self, config: &PluginConfig) -> Result<T> {
        let ctor = self
            .lookup(config.kind())
            .ok_or_else(|| TransformError::UnknownPlugin {
                registry: self.name,
                key: config.kind().to_string(),
            })?;
        ctor(config.options())
    }
}
