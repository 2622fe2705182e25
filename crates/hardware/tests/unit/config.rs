//! Configuration Unit Tests.

use pipesim_core::Config;
use pipesim_core::common::SimError;

#[test]
fn default_map_has_text_data_and_stack() {
    let config = Config::default();
    let names: Vec<&str> = config.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["text", "data", "stack"]);
    assert_eq!(config.text_base, config.regions[0].base);
}

#[test]
fn json_overrides_the_defaults() {
    let config = Config::from_json(
        r#"{
            "text_base": 8192,
            "regions": [
                { "name": "text", "base": 8192, "size": 4096 }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(config.text_base, 8192);
    assert_eq!(config.regions.len(), 1);
    assert_eq!(config.regions[0].size, 4096);
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.text_base, 0x0040_0000);
    assert_eq!(config.regions.len(), 3);
}

#[test]
fn malformed_json_is_a_typed_error() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)));
}
