//! Tests for the plugin registries and configuration parsing.

use serde_json::{json, Value};
use transform::{
    create_filter, filter_registry, source_registry, PluginConfig, Registry, Result,
    TransformError,
};

// ============================================================================
// Registry behavior
// ============================================================================

fn dummy_ctor(_options: &Value) -> Result<&'static str> {
    Ok("built")
}

#[test]
fn test_registration_and_lookup() {
    let mut registry = Registry::new("demo");
    registry.register("dummy", dummy_ctor);

    assert!(registry.contains("dummy"));
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["dummy"]);
    assert_eq!(
        registry.from_config(&PluginConfig::new("dummy")).unwrap(),
        "built"
    );
}

#[test]
#[should_panic(expected = "duplicate demo registration for key 'dummy'")]
fn test_duplicate_key_panics_with_registry_and_key() {
    let mut registry = Registry::new("demo");
    registry.register("dummy", dummy_ctor);
    registry.register("dummy", dummy_ctor);
}

#[test]
fn test_builtin_registries_carry_their_plugins() {
    assert!(filter_registry().contains("nordic_pp"));
    assert!(source_registry().contains("memory"));
}

#[test]
fn test_unknown_filter_key_names_the_registry() {
    let err = create_filter(&PluginConfig::new("mask_opera")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown filter type: 'mask_opera'"
    );
}

// ============================================================================
// Configuration shapes (pipeline configs arrive as YAML)
// ============================================================================

#[test]
fn test_bare_string_yaml_config() {
    let config: PluginConfig = serde_yaml::from_str("nordic_pp").unwrap();
    assert_eq!(config.kind(), "nordic_pp");
    assert_eq!(config.options(), &json!({}));
}

#[test]
fn test_mapping_yaml_config() {
    let config: PluginConfig = serde_yaml::from_str(
        "type: nordic_pp\nlwe: precip\noutput: precip_pp\n",
    )
    .unwrap();
    assert_eq!(config.kind(), "nordic_pp");
    assert_eq!(config.options(), &json!({"lwe": "precip", "output": "precip_pp"}));
}

#[test]
fn test_yaml_mapping_without_type_key_fails() {
    let result: std::result::Result<PluginConfig, _> =
        serde_yaml::from_str("output: precip_pp\n");
    assert!(result.is_err());
}

#[test]
fn test_missing_type_key_error_from_value() {
    let err = PluginConfig::from_value(json!({"output": "lwe_pp"})).unwrap_err();
    assert!(matches!(err, TransformError::MissingTypeKey));
}
